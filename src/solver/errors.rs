use thiserror::Error;

use crate::puzzle::ParseError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Puzzle parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
