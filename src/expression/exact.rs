use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

fn digit(d: u8) -> BigRational {
    BigRational::from_integer(BigInt::from(d))
}

impl Expression {
    /// Same precedence rules as [`Expression::evaluate`], computed over
    /// arbitrary-precision rationals so chained divisions never lose precision.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] if any `/` has a zero divisor.
    pub fn evaluate_exact(&self) -> Result<BigRational, ExpressionError> {
        let mut operands = self.operands().iter().copied();
        let mut term = operands.next().map(digit).ok_or(ExpressionError::Empty)?;
        let mut total = BigRational::zero();

        for (&op, d) in self.operators().iter().zip(operands) {
            let operand = digit(d);
            match op {
                Operator::Mul => term *= operand,
                Operator::Div => {
                    if operand.is_zero() {
                        return Err(ExpressionError::DivisionByZero);
                    }
                    term /= operand;
                }
                Operator::Add => {
                    total += term;
                    term = operand;
                }
                Operator::Sub => {
                    total += term;
                    term = -operand;
                }
            }
        }
        total += term;

        debug!("Expression {} evaluated exactly to: {}", self, total);
        Ok(total)
    }

    /// Exact counterpart of [`Expression::try_matches_target`]: the rational
    /// value must be an integer equal to `target`.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors such as division by zero.
    pub fn try_matches_target_exact(&self, target: i64) -> Result<bool, ExpressionError> {
        let value = self.evaluate_exact()?;
        Ok(value.is_integer() && *value.numer() == BigInt::from(target))
    }

    pub fn matches_target_exact(&self, target: i64) -> bool {
        self.try_matches_target_exact(target).unwrap_or_else(|e| {
            debug!("Rejecting {}: {}", self, e);
            false
        })
    }
}
