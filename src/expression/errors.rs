use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Expression has no operands")]
    Empty,
    #[error("Operand must be a single digit, got {0}")]
    InvalidOperand(u8),
    #[error("Operator count mismatch: {operators} operators for {operands} operands")]
    OperatorCountMismatch { operands: usize, operators: usize },
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}
