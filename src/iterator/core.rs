use log::debug;

use crate::expression::Operator;

use super::constants::OPERATOR_ORDER;
use super::state::OdometerState;

/// Number of assignments for `free_positions` blanks, `None` on overflow
pub fn candidate_count(free_positions: usize) -> Option<usize> {
    let exponent = u32::try_from(free_positions).ok()?;
    OPERATOR_ORDER.len().checked_pow(exponent)
}

/// Yields every operator assignment of a fixed length in depth-first
/// pre-order over [`OPERATOR_ORDER`], optionally below a fixed prefix.
///
/// Iteration is index based, so the assignment length is not limited by
/// recursion depth.
#[derive(Debug, Clone)]
pub struct AssignmentIterator {
    prefix: Vec<Operator>,
    state: OdometerState,
}

impl AssignmentIterator {
    /// All assignments of `length` operators
    pub fn new(length: usize) -> Self {
        Self::with_prefix(Vec::new(), length)
    }

    /// Assignments of `length` operators that start with `prefix`.
    ///
    /// Yields nothing if the prefix is longer than `length`.
    pub fn with_prefix(prefix: Vec<Operator>, length: usize) -> Self {
        let mut state = OdometerState::new(
            length.saturating_sub(prefix.len()),
            OPERATOR_ORDER.len(),
        );
        if prefix.len() > length {
            debug!(
                "Prefix of length {} exceeds assignment length {}",
                prefix.len(),
                length
            );
            state.mark_exhausted();
        }
        Self { prefix, state }
    }

    fn current(&self) -> Vec<Operator> {
        let mut assignment = Vec::with_capacity(self.prefix.len() + self.state.digits.len());
        assignment.extend_from_slice(&self.prefix);
        assignment.extend(
            self.state
                .digits
                .iter()
                .filter_map(|&i| OPERATOR_ORDER.get(i).copied()),
        );
        assignment
    }
}

impl Iterator for AssignmentIterator {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.exhausted {
            return None;
        }
        let assignment = self.current();
        self.state.advance();
        Some(assignment)
    }
}
