mod cancel;
mod config;
mod core;
mod errors;
mod result;

pub use crate::iterator::OPERATOR_ORDER;
pub use cancel::CancellationToken;
pub use config::{Arithmetic, SolverConfig};
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use result::{SearchReport, SearchStats, SolveResult};
