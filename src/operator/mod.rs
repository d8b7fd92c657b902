//! The fixed catalog of binary operators a search may combine values with

mod catalog;
pub mod constants;
mod errors;

pub use catalog::{Operator, parse_operators};
pub use errors::OperatorError;

#[cfg(test)]
mod tests;
