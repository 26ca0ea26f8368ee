use std::str::FromStr;

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Parses the concatenated form produced by `Display`, e.g. `2+3*4`.
///
/// Whitespace between tokens is ignored. Digits and operators must strictly
/// alternate, starting and ending with a digit.
impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("Parsing expression: '{}'", s);

        let mut operands = Vec::new();
        let mut operators = Vec::new();
        let mut expect_operand = true;

        for (position, character) in s.chars().enumerate() {
            if character.is_whitespace() {
                continue;
            }
            let unexpected = ExpressionError::UnexpectedCharacter {
                character,
                position,
            };
            if expect_operand {
                let d = character.to_digit(10).ok_or(unexpected)?;
                operands.push(d as u8);
            } else {
                operators.push(Operator::from_symbol(character).ok_or(unexpected)?);
            }
            expect_operand = !expect_operand;
        }

        Expression::new(operands, operators)
    }
}
