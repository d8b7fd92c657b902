//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::parse_digits;
pub use errors::UtilsError;
pub use validation::{validate_digit_count, validate_digit_string};
