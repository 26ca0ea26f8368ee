//! Extraction of an [`Equation`] from raw puzzle text

mod equation;
mod errors;
mod parser;

pub use equation::Equation;
pub use errors::ParseError;
pub use parser::parse_puzzle;

#[cfg(test)]
mod tests;
