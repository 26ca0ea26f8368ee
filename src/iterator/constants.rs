use crate::expression::Operator;

/// Trial order at every blank. The first accepted assignment in depth-first
/// pre-order over this order is the one returned.
pub const OPERATOR_ORDER: [Operator; 4] =
    [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];
