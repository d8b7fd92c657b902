use thiserror::Error;

use crate::operator::OperatorError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Cannot reduce an empty list of digits")]
    EmptySearchState,
    #[error("Position {position} is outside a search state of length {len}")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("Operator error: {0}")]
    OperatorError(#[from] OperatorError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
