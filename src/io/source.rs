use std::io::{self, BufRead};

use log::debug;

/// Anything that can hand over one raw puzzle string
pub trait PuzzleSource {
    /// # Errors
    ///
    /// Returns an error if the puzzle cannot be retrieved.
    fn fetch_puzzle(&mut self) -> io::Result<String>;
}

/// A puzzle already held in memory
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PuzzleSource for TextSource {
    fn fetch_puzzle(&mut self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}

/// Reads the whole input, without its trailing line ending
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PuzzleSource for ReaderSource<R> {
    fn fetch_puzzle(&mut self) -> io::Result<String> {
        let mut input = String::new();
        let read = self.reader.read_to_string(&mut input)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no puzzle on input",
            ));
        }
        let trimmed = input.strip_suffix('\n').unwrap_or(&input);
        let puzzle = trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string();
        debug!("Read puzzle: '{}'", puzzle);
        Ok(puzzle)
    }
}
