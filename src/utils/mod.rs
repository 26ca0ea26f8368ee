//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::{digit_value, digits_to_operands};
pub use errors::UtilsError;
pub use validation::validate_digit_string;
