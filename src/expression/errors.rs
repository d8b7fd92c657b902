use thiserror::Error;

use crate::number::Number;
use crate::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Operator '{op}' cannot be applied to {left} and {right}")]
    InvalidOperation {
        op: Operator,
        left: Number,
        right: Number,
    },
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),
}
