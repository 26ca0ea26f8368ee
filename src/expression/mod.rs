//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod exact;
mod parse;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
