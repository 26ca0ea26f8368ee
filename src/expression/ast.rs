use crate::expression::errors::ExpressionError;

/// Binary operator that can fill a blank between two digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// Single digits interleaved with operators: `d0 op1 d1 op2 ... dn-1`.
///
/// There are no parentheses, so the value is fully determined by the
/// operands, the operators and the two-tier precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    operands: Vec<u8>,
    operators: Vec<Operator>,
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error if there are no operands, if any operand is not a
    /// single decimal digit, or if the operator count is not exactly one
    /// less than the operand count.
    pub fn new(operands: Vec<u8>, operators: Vec<Operator>) -> Result<Self, ExpressionError> {
        if operands.is_empty() {
            return Err(ExpressionError::Empty);
        }
        if let Some(&bad) = operands.iter().find(|&&d| d > 9) {
            return Err(ExpressionError::InvalidOperand(bad));
        }
        if operators.len() + 1 != operands.len() {
            return Err(ExpressionError::OperatorCountMismatch {
                operands: operands.len(),
                operators: operators.len(),
            });
        }
        Ok(Self {
            operands,
            operators,
        })
    }

    pub fn operands(&self) -> &[u8] {
        &self.operands
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }
}
