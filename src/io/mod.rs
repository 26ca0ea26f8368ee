//! Seams for the collaborators that supply puzzles and accept answers

mod sink;
mod source;

pub use sink::{AnswerSink, WriterSink};
pub use source::{PuzzleSource, ReaderSource, TextSource};

#[cfg(test)]
mod tests;
