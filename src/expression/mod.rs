//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod latex;
mod parse;

pub use ast::{Expression, Node};
pub use errors::ExpressionError;
