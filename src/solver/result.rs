use std::fmt;

use crate::expression::Expression;

/// Outcome of a search: the first accepted expression, or an explicit
/// signal that no assignment satisfies the equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved(Expression),
    NoSolution,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            SolveResult::Solved(expr) => Some(expr),
            SolveResult::NoSolution => None,
        }
    }
}

impl From<Option<Expression>> for SolveResult {
    fn from(found: Option<Expression>) -> Self {
        found.map_or(SolveResult::NoSolution, SolveResult::Solved)
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveResult::Solved(expr) => write!(f, "{}", expr),
            SolveResult::NoSolution => write!(f, "no solution"),
        }
    }
}

/// Counters gathered while searching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub candidates_evaluated: usize,
    pub division_by_zero: usize,
    pub cancelled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub result: SolveResult,
    pub stats: SearchStats,
}
