use log::debug;

use crate::utils::errors::UtilsError;

/// Split a digit string into its individual digit values, in order.
///
/// # Errors
///
/// Returns an error if any character is not an ASCII digit.
pub fn parse_digits(digits: &str) -> Result<Vec<u32>, UtilsError> {
    let parsed = digits
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(|| UtilsError::InvalidDigitString(digits.to_string()))?;

    debug!("Parsed '{}' into {:?}", digits, parsed);
    Ok(parsed)
}
