use thiserror::Error;

/// Errors raised while selecting operators by symbol
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("Unknown operator '{symbol}', allowed operators: +-*/^")]
    UnknownSymbol { symbol: char },
    #[error("At least one operator must be selected")]
    EmptySet,
}
