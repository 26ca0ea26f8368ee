use crate::puzzle::errors::ParseError;
use crate::utils::digits_to_operands;

/// Single-digit operands whose blanks must be filled so the result equals `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    operands: Vec<u8>,
    target: i64,
}

impl Equation {
    /// # Errors
    ///
    /// Returns an error if `operands` is empty or holds a value above 9.
    pub fn new(operands: Vec<u8>, target: i64) -> Result<Self, ParseError> {
        if operands.is_empty() {
            return Err(ParseError::NoOperands);
        }
        if let Some(&bad) = operands.iter().find(|&&d| d > 9) {
            return Err(ParseError::OperandOutOfRange(bad));
        }
        Ok(Self { operands, target })
    }

    /// Build an equation from a plain digit string such as `"123"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is empty or contains non-digit characters.
    pub fn from_digits(digits: &str, target: i64) -> Result<Self, ParseError> {
        Self::new(digits_to_operands(digits)?, target)
    }

    pub fn operands(&self) -> &[u8] {
        &self.operands
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Number of operators every candidate assignment must have
    pub fn blank_count(&self) -> usize {
        self.operands.len().saturating_sub(1)
    }
}
