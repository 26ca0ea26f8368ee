use log::debug;

use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_digit_string;

/// Value of a single ASCII decimal digit
#[inline]
pub fn digit_value(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

/// Split a digit string into one operand per character.
///
/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit characters.
pub fn digits_to_operands(digits: &str) -> Result<Vec<u8>, UtilsError> {
    validate_digit_string(digits)?;

    let operands: Vec<u8> = digits.chars().filter_map(digit_value).collect();
    debug!("Converted '{}' to operands {:?}", digits, operands);
    Ok(operands)
}
