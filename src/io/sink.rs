use std::io::{self, Write};

/// Anything that accepts the solved expression string
pub trait AnswerSink {
    /// # Errors
    ///
    /// Returns an error if the answer cannot be delivered.
    fn submit_answer(&mut self, answer: &str) -> io::Result<()>;
}

/// Writes each answer on its own line
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AnswerSink for WriterSink<W> {
    fn submit_answer(&mut self, answer: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", answer)?;
        self.writer.flush()
    }
}
