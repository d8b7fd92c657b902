//! Traingame - find every way to combine a handful of digits into a target number
//!
//! Each digit is used exactly once, combined pairwise with a chosen subset of
//! `+ - * / ^` in every possible order. Arithmetic is exact, so `8 / (3 - 8 / 3)`
//! really is 24. Solutions are rendered with the fewest parentheses the
//! operator precedence allows, and each rendered string is reported once.

pub mod expression;
pub mod number;
pub mod operator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use number::Number;
pub use operator::{Operator, OperatorError, parse_operators};
pub use solver::{SolutionSet, Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_digits, validate_digit_string};

/// Find every expression over the given digits that evaluates to the target
///
/// This is a convenience function that validates its inputs and runs a solver
/// with the requested operators.
///
/// # Arguments
///
/// * `digits` - A string containing only ASCII digits, each used once
/// * `target` - The value every solution must equal exactly
/// * `operators` - Operator symbols to use, any of `+-*/^`
///
/// # Returns
///
/// The distinct solutions in sorted order; empty when the target cannot be reached.
///
/// # Errors
///
/// This function will return an error if:
/// * The digit string is empty or contains non-digit characters
/// * An operator symbol is unknown, or no operator is given
///
/// # Examples
///
/// ```
/// let solutions = traingame::solve("8833", 24, "+-*/")?;
/// assert!(solutions.iter().any(|s| s == "8 / (3 - 8 / 3)"));
/// # Ok::<(), traingame::SolverError>(())
/// ```
pub fn solve(digits: &str, target: i64, operators: &str) -> Result<Vec<String>, SolverError> {
    validate_digit_string(digits)?;
    let digits = parse_digits(digits)?;
    let operators = parse_operators(operators)?;

    Solver::new(SolverConfig::with_operators(operators)).solve(&digits, target)
}
