use log::{debug, warn};

use crate::puzzle::equation::Equation;
use crate::puzzle::errors::ParseError;
use crate::utils::digit_value;

/// Extract operands and target from text such as `"1 □ 2 □ 3 = 6"`.
///
/// Every decimal digit before the first `=` becomes an operand, in order;
/// all other characters are filler. Exactly one separator character after
/// the `=` is skipped and the rest is parsed as the target.
///
/// # Errors
///
/// Returns an error if there is no `=`, if the target is not an integer, or
/// if no digits precede the `=`.
pub fn parse_puzzle(text: &str) -> Result<Equation, ParseError> {
    debug!("Parsing puzzle: '{}'", text);

    let mut operands = Vec::new();
    let mut equals_at = None;

    for (index, c) in text.char_indices() {
        if let Some(d) = digit_value(c) {
            operands.push(d);
        }
        if c == '=' {
            equals_at = Some(index);
            break;
        }
    }

    let Some(equals_at) = equals_at else {
        warn!("Puzzle has no '=': '{}'", text);
        return Err(ParseError::MissingEquals);
    };

    let mut rest = text.get(equals_at + '='.len_utf8()..).unwrap_or_default().chars();
    rest.next();
    let target_text = rest.as_str();

    let target = target_text.parse::<i64>().map_err(|_| {
        warn!("Target is not an integer: '{}'", target_text);
        ParseError::InvalidTarget(target_text.to_string())
    })?;

    if operands.is_empty() {
        warn!("Puzzle has no digits before '=': '{}'", text);
        return Err(ParseError::NoOperands);
    }

    debug!("Parsed operands {:?} with target {}", operands, target);
    Equation::new(operands, target)
}
