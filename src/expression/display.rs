use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operands and operators concatenated with no separators, e.g. `1+2*3`
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut operands = self.operands().iter();
        if let Some(first) = operands.next() {
            write!(f, "{}", first)?;
        }
        for (op, operand) in self.operators().iter().zip(operands) {
            write!(f, "{}{}", op, operand)?;
        }
        Ok(())
    }
}
