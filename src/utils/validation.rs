use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit characters.
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    debug!("Digit string validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the string does not hold exactly `expected` characters.
pub fn validate_digit_count(digit_string: &str, expected: usize) -> Result<(), UtilsError> {
    let found = digit_string.chars().count();
    if found != expected {
        warn!("Expected {} digits, got {}", expected, found);
        return Err(UtilsError::WrongDigitCount { expected, found });
    }
    Ok(())
}
