use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// 2^63, the first `f64` past `i64::MAX`
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Accept `value` only if it is exactly an integer equal to `target`.
///
/// The comparison happens in `i64`, since `target as f64` rounds above 2^53.
#[inline]
fn is_exact_integer_match(value: f64, target: i64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value >= -I64_UPPER_BOUND
        && value < I64_UPPER_BOUND
        && value as i64 == target
}

impl Expression {
    /// Evaluate with `*` and `/` before `+` and `-`, left to right within a tier.
    ///
    /// Multiplicative runs are first collapsed into signed terms, which are
    /// then summed left to right.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] if any `/` has a zero divisor.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let mut operands = self.operands().iter().map(|&d| f64::from(d));
        let mut term = operands.next().ok_or(ExpressionError::Empty)?;
        let mut terms = Vec::with_capacity(self.operators().len() + 1);

        for (&op, operand) in self.operators().iter().zip(operands) {
            match op {
                Operator::Mul => term *= operand,
                Operator::Div => {
                    if operand == 0.0 {
                        debug!("Division by zero attempted");
                        return Err(ExpressionError::DivisionByZero);
                    }
                    term /= operand;
                }
                Operator::Add => {
                    terms.push(term);
                    term = operand;
                }
                Operator::Sub => {
                    terms.push(term);
                    term = -operand;
                }
            }
        }
        terms.push(term);

        let value = terms.into_iter().fold(0.0, |acc, t| acc + t);
        debug!("Expression evaluated to: {}", value);
        Ok(value)
    }

    /// Whether the floating-point value of this expression is exactly `target`.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors such as division by zero.
    pub fn try_matches_target(&self, target: i64) -> Result<bool, ExpressionError> {
        self.evaluate()
            .map(|value| is_exact_integer_match(value, target))
    }

    /// Like [`Expression::try_matches_target`], counting evaluation errors as a mismatch
    pub fn matches_target(&self, target: i64) -> bool {
        self.try_matches_target(target).unwrap_or_else(|e| {
            debug!("Rejecting {}: {}", self, e);
            false
        })
    }
}
