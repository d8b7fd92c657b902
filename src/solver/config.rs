use crate::operator::Operator;

/// Configuration for a search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Operators the search may use, in catalog order
    pub operators: Vec<Operator>,
    /// Spread the top-level branches over the rayon thread pool
    pub parallel: bool,
}

impl SolverConfig {
    pub fn with_operators(operators: Vec<Operator>) -> Self {
        Self {
            operators,
            ..Self::default()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            operators: vec![Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
            parallel: true,
        }
    }
}
