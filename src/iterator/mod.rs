pub mod constants;
pub mod core;
pub mod state;

pub use constants::OPERATOR_ORDER;
pub use core::{AssignmentIterator, candidate_count};
