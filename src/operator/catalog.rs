use std::fmt;

use log::{debug, warn};

use crate::number::Number;
use crate::operator::constants::MAX_EXPONENT_MAGNITUDE;
use crate::operator::errors::OperatorError;

/// A binary operator from the catalog `+ - * / ^`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Every operator, in catalog order
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// Binding level; a higher value binds looser (`+` is 10, `^` is 1)
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 10,
            Operator::Mul | Operator::Div => 5,
            Operator::Pow => 1,
        }
    }

    /// Whether this operator may be applied to the given operands
    pub fn is_valid(self, left: &Number, right: &Number) -> bool {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul => true,
            Operator::Div => !right.is_zero(),
            Operator::Pow => {
                let non_positive_exponent = right.is_zero() || right.is_negative();
                right.abs() <= Number::from_integer(MAX_EXPONENT_MAGNITUDE)
                    && !(left.is_zero() && non_positive_exponent)
                    && !(left.is_negative() && !right.is_integer())
            }
        }
    }

    /// Combine two values.
    ///
    /// Returns `None` when the validity guard rejects the operands, or when a
    /// power has no rational result (for example `2 ^ (1/2)`).
    pub fn apply(self, left: &Number, right: &Number) -> Option<Number> {
        if !self.is_valid(left, right) {
            return None;
        }
        match self {
            Operator::Add => Some(left + right),
            Operator::Sub => Some(left - right),
            Operator::Mul => Some(left * right),
            Operator::Div => left.checked_div(right),
            Operator::Pow => left.checked_pow(right),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the symbol is not part of the catalog.
    pub fn from_symbol(symbol: char) -> Result<Self, OperatorError> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or(OperatorError::UnknownSymbol { symbol })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a symbol string such as `"+-*/"` into a set of operators.
///
/// Duplicates are ignored and the result follows catalog order regardless of
/// the order the symbols were given in.
///
/// # Errors
///
/// Returns an error if a symbol is unknown or no symbol is given at all.
pub fn parse_operators(symbols: &str) -> Result<Vec<Operator>, OperatorError> {
    debug!("Parsing operator symbols: '{}'", symbols);

    let mut requested = Vec::new();
    for symbol in symbols.chars().filter(|c| !c.is_whitespace()) {
        match Operator::from_symbol(symbol) {
            Ok(op) => requested.push(op),
            Err(e) => {
                warn!("Rejecting operator symbol '{}'", symbol);
                return Err(e);
            }
        }
    }

    let selected: Vec<Operator> = Operator::ALL
        .into_iter()
        .filter(|op| requested.contains(op))
        .collect();

    if selected.is_empty() {
        warn!("No operators selected");
        return Err(OperatorError::EmptySet);
    }

    debug!("Selected operators: {:?}", selected);
    Ok(selected)
}
