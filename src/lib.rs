//! Opfill - A library for filling in the missing operators of a digit puzzle
//!
//! Given a puzzle such as `"1 □ 2 □ 3 = 6"`, opfill finds the first sequence of
//! `+`, `-`, `*` and `/` that makes the equation hold under the usual
//! precedence rules, trying operators in that order at every blank.

pub mod expression;
pub mod io;
pub mod iterator;
pub mod puzzle;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use puzzle::{Equation, ParseError, parse_puzzle};
pub use solver::{
    Arithmetic, CancellationToken, ExpressionSolver, OPERATOR_ORDER, SolveResult, SolverConfig,
    SolverError,
};
pub use utils::{UtilsError, validate_digit_string};

/// Parse a raw puzzle and solve it with the default solver
///
/// # Arguments
///
/// * `puzzle` - Digits with filler between them, then `= <target>`
///
/// # Returns
///
/// * `Ok(SolveResult::Solved(expr))` - The first matching expression in trial order
/// * `Ok(SolveResult::NoSolution)` - If every operator assignment was rejected
/// * `Err(SolverError)` - If the puzzle could not be parsed
///
/// # Errors
///
/// This function will return an error if:
/// * The puzzle has no `=`
/// * The text after `= ` is not an integer
/// * No digits precede the `=`
///
/// # Examples
///
/// ```
/// use opfill::solve_puzzle;
///
/// match solve_puzzle("1 □ 2 □ 3 = 6") {
///     Ok(result) => println!("Found: {}", result),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_puzzle(puzzle: &str) -> Result<SolveResult, SolverError> {
    let equation = parse_puzzle(puzzle)?;

    let solver = ExpressionSolver::default();
    Ok(solver.find_expression(&equation))
}

/// Find operators for a plain digit string and target
///
/// # Errors
///
/// This function will return an error if `digits` is empty or contains
/// non-digit characters.
///
/// # Examples
///
/// ```
/// use opfill::{SolveResult, find_expression};
///
/// let result = find_expression("123", 6);
/// assert!(matches!(result, Ok(SolveResult::Solved(_))));
/// ```
pub fn find_expression(digits: &str, target: i64) -> Result<SolveResult, SolverError> {
    validate_digit_string(digits)?;
    let equation = Equation::from_digits(digits, target)?;

    let solver = ExpressionSolver::default();
    Ok(solver.find_expression(&equation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_puzzle_scenarios() {
        let result = solve_puzzle("1 □ 2 □ 3 = 6");
        assert!(matches!(&result, Ok(SolveResult::Solved(e)) if e.to_string() == "1+2+3"));

        let result = solve_puzzle("5 = 5");
        assert!(matches!(&result, Ok(SolveResult::Solved(e)) if e.to_string() == "5"));

        let result = solve_puzzle("1 □ 1 = 5");
        assert_eq!(result, Ok(SolveResult::NoSolution));
    }

    #[test]
    fn test_solve_puzzle_parse_error() {
        let result = solve_puzzle("1 □ 2 □ 3");
        assert_eq!(
            result,
            Err(SolverError::ParseError(ParseError::MissingEquals))
        );
    }

    #[test]
    fn test_find_expression_validates_digits() {
        let result = find_expression("12a", 3);
        assert!(matches!(result, Err(SolverError::UtilsError(_))));

        let result = find_expression("", 0);
        assert_eq!(
            result,
            Err(SolverError::UtilsError(UtilsError::EmptyDigitString))
        );
    }
}
