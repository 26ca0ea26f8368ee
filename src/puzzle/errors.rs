use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Puzzle has no '=' separating the digits from the target")]
    MissingEquals,
    #[error("Target is not a valid integer: '{0}'")]
    InvalidTarget(String),
    #[error("Puzzle contains no digits before '='")]
    NoOperands,
    #[error("Operand must be a single digit, got {0}")]
    OperandOutOfRange(u8),
    #[error("Invalid digits: {0}")]
    InvalidDigits(#[from] UtilsError),
}
