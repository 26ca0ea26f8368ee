use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty or contains any non-ASCII-digit characters.
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if let Some((position, c)) = digit_string
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        warn!(
            "Non-digit '{}' at byte {} of '{}'",
            c, position, digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    debug!("Digit string '{}' is valid", digit_string);
    Ok(())
}
