use std::io::{Cursor, ErrorKind};

use crate::io::{AnswerSink, PuzzleSource, ReaderSource, TextSource, WriterSink};

#[test]
fn test_text_source_returns_text() {
    let mut source = TextSource::new("1 2 3 = 6");
    let puzzle = source.fetch_puzzle();
    assert!(matches!(puzzle.as_deref(), Ok("1 2 3 = 6")));
}

#[test]
fn test_reader_source_strips_line_ending() {
    let mut source = ReaderSource::new(Cursor::new("1 2 3 = 6\r\n"));
    let puzzle = source.fetch_puzzle();
    assert!(matches!(puzzle.as_deref(), Ok("1 2 3 = 6")));

    let mut source = ReaderSource::new(Cursor::new("5 = 5"));
    let puzzle = source.fetch_puzzle();
    assert!(matches!(puzzle.as_deref(), Ok("5 = 5")));
}

#[test]
fn test_reader_source_reads_all_input() {
    let mut source = ReaderSource::new(Cursor::new("1 □ 2\n□ 3 = 6\n"));
    let puzzle = source.fetch_puzzle();
    assert!(matches!(puzzle.as_deref(), Ok("1 □ 2\n□ 3 = 6")));
}

#[test]
fn test_reader_source_empty_input() {
    let mut source = ReaderSource::new(Cursor::new(""));
    let puzzle = source.fetch_puzzle();
    assert!(matches!(puzzle, Err(e) if e.kind() == ErrorKind::UnexpectedEof));
}

#[test]
fn test_writer_sink_writes_one_line_per_answer() {
    let mut sink = WriterSink::new(Vec::new());
    assert!(sink.submit_answer("1+2+3").is_ok());
    assert!(sink.submit_answer("9+9-9").is_ok());
    assert_eq!(sink.into_inner(), b"1+2+3\n9+9-9\n".to_vec());
}
