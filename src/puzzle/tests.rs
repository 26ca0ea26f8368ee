use crate::puzzle::{Equation, ParseError, parse_puzzle};
use crate::utils::UtilsError;

#[test]
fn test_parse_simple_puzzle() {
    let result = parse_puzzle("1 □ 2 □ 3 = 6");
    assert!(result.is_ok());
    if let Ok(equation) = result {
        assert_eq!(equation.operands(), &[1, 2, 3]);
        assert_eq!(equation.target(), 6);
        assert_eq!(equation.blank_count(), 2);
    }
}

#[test]
fn test_parse_collects_digits_from_any_filler() {
    let result = parse_puzzle("[4]?[0]?(7)=_42");
    assert_eq!(result, Equation::new(vec![4, 0, 7], 42));
}

#[test]
fn test_parse_negative_target() {
    let result = parse_puzzle("1 _ 9 = -8");
    assert_eq!(result, Equation::new(vec![1, 9], -8));
}

#[test]
fn test_digits_after_equals_are_not_operands() {
    let result = parse_puzzle("5 = 5");
    assert!(result.is_ok());
    if let Ok(equation) = result {
        assert_eq!(equation.operands(), &[5]);
        assert_eq!(equation.blank_count(), 0);
    }
}

#[test]
fn test_parse_missing_equals() {
    assert_eq!(parse_puzzle("1 2 3 6"), Err(ParseError::MissingEquals));
    assert_eq!(parse_puzzle(""), Err(ParseError::MissingEquals));
}

#[test]
fn test_parse_invalid_target() {
    assert_eq!(
        parse_puzzle("1 2 = x"),
        Err(ParseError::InvalidTarget("x".to_string()))
    );
    assert_eq!(
        parse_puzzle("1 2 ="),
        Err(ParseError::InvalidTarget(String::new()))
    );
    assert_eq!(
        parse_puzzle("1 2 = 3.5"),
        Err(ParseError::InvalidTarget("3.5".to_string()))
    );
}

#[test]
fn test_parse_skips_exactly_one_separator() {
    // Two spaces leave a leading space on the target text
    assert_eq!(
        parse_puzzle("1 2 =  3"),
        Err(ParseError::InvalidTarget(" 3".to_string()))
    );
    // The skipped character need not be a space
    assert_eq!(parse_puzzle("1 2 =x3"), Equation::new(vec![1, 2], 3));
}

#[test]
fn test_parse_no_operands() {
    assert_eq!(parse_puzzle("a b = 3"), Err(ParseError::NoOperands));
}

#[test]
fn test_equation_from_digits() {
    assert_eq!(Equation::from_digits("999", 9), Equation::new(vec![9, 9, 9], 9));
    assert_eq!(
        Equation::from_digits("9a9", 9),
        Err(ParseError::InvalidDigits(UtilsError::InvalidDigitString(
            "9a9".to_string()
        )))
    );
}

#[test]
fn test_equation_rejects_out_of_range_operand() {
    assert_eq!(
        Equation::new(vec![1, 10], 11),
        Err(ParseError::OperandOutOfRange(10))
    );
    assert_eq!(Equation::new(vec![], 0), Err(ParseError::NoOperands));
}
