use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::expression::{Expression, ExpressionError};
use crate::iterator::{AssignmentIterator, OPERATOR_ORDER, candidate_count};
use crate::puzzle::Equation;
use crate::solver::cancel::CancellationToken;
use crate::solver::config::{Arithmetic, SolverConfig};
use crate::solver::result::{SearchReport, SearchStats, SolveResult};

#[derive(Default)]
struct SearchCounters {
    evaluated: AtomicUsize,
    division_by_zero: AtomicUsize,
    /// Lowest top-level branch index that has found a match
    best_branch: AtomicUsize,
}

impl SearchCounters {
    fn new() -> Self {
        Self {
            best_branch: AtomicUsize::new(usize::MAX),
            ..Self::default()
        }
    }
}

/// Depth-first search for the operators that make an [`Equation`] hold
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the first accepted expression in depth-first order
    pub fn find_expression(&self, equation: &Equation) -> SolveResult {
        self.search(equation, &CancellationToken::new()).result
    }

    /// Run the search, stopping early if `cancel` is triggered.
    ///
    /// A cancelled search reports [`SolveResult::NoSolution`] with
    /// [`SearchStats::cancelled`] set.
    pub fn search(&self, equation: &Equation, cancel: &CancellationToken) -> SearchReport {
        let blanks = equation.blank_count();
        match candidate_count(blanks) {
            Some(count) => info!(
                "Searching {} candidates for operands {:?} = {}",
                count,
                equation.operands(),
                equation.target()
            ),
            None => info!(
                "Searching 4^{} candidates for operands {:?} = {}",
                blanks,
                equation.operands(),
                equation.target()
            ),
        }

        let counters = SearchCounters::new();

        let found = if self.config.parallel && blanks > 0 {
            OPERATOR_ORDER
                .par_iter()
                .enumerate()
                .find_map_first(|(branch, &op)| {
                    let candidates = AssignmentIterator::with_prefix(vec![op], blanks);
                    self.search_branch(equation, candidates, branch, cancel, &counters)
                })
        } else {
            self.search_branch(
                equation,
                AssignmentIterator::new(blanks),
                0,
                cancel,
                &counters,
            )
        };

        let stats = SearchStats {
            candidates_evaluated: counters.evaluated.load(Ordering::Relaxed),
            division_by_zero: counters.division_by_zero.load(Ordering::Relaxed),
            cancelled: found.is_none() && cancel.is_cancelled(),
        };

        match &found {
            Some(expr) => info!(
                "Found {} after evaluating {} candidates",
                expr, stats.candidates_evaluated
            ),
            None if stats.cancelled => warn!(
                "Search cancelled after evaluating {} candidates",
                stats.candidates_evaluated
            ),
            None => warn!(
                "No assignment matches after evaluating {} candidates ({} divided by zero)",
                stats.candidates_evaluated, stats.division_by_zero
            ),
        }

        SearchReport {
            result: SolveResult::from(found),
            stats,
        }
    }

    /// Walk one subtree of candidates and return the first match.
    ///
    /// `branch` orders sibling subtrees searched in parallel; a subtree gives
    /// up once a lower-indexed sibling has already matched.
    fn search_branch(
        &self,
        equation: &Equation,
        candidates: AssignmentIterator,
        branch: usize,
        cancel: &CancellationToken,
        counters: &SearchCounters,
    ) -> Option<Expression> {
        for operators in candidates {
            if cancel.is_cancelled() || counters.best_branch.load(Ordering::Relaxed) < branch {
                debug!("Abandoning branch {}", branch);
                return None;
            }

            let expr = match Expression::new(equation.operands().to_vec(), operators) {
                Ok(expr) => expr,
                Err(e) => {
                    warn!("Skipping malformed candidate: {}", e);
                    continue;
                }
            };

            counters.evaluated.fetch_add(1, Ordering::Relaxed);
            match self.check(&expr, equation.target()) {
                Ok(true) => {
                    counters.best_branch.fetch_min(branch, Ordering::Relaxed);
                    return Some(expr);
                }
                Ok(false) => {}
                Err(ExpressionError::DivisionByZero) => {
                    counters.division_by_zero.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => debug!("Rejecting {}: {}", expr, e),
            }
        }
        None
    }

    fn check(&self, expr: &Expression, target: i64) -> Result<bool, ExpressionError> {
        match self.config.arithmetic {
            Arithmetic::Float => expr.try_matches_target(target),
            Arithmetic::Exact => expr.try_matches_target_exact(target),
        }
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
