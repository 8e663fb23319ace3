use super::cursor::CursorError;
use super::source::{SourceOffset, Span};

use thiserror::Error;

/// Failure to parse a token sequence. Every variant aborts the parse;
/// no partial tree is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
  #[error("Expected token, but found EOF")]
  UnexpectedEOF,
  #[error("Expected '{expected}' to close group opened at {open_span}, but found EOF")]
  UnclosedGroup { expected: String, open_span: Span },
  #[error("Expected '{expected}', but found '{found}' at {span}")]
  MismatchedGroup { expected: String, found: String, span: Span },
  #[error("Expected end of input, but found '{found}' at {span}")]
  UnexpectedToken { found: String, span: Span },
  #[error("Unexpected character '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  #[error("Expression nested more than {limit} levels deep at {span}")]
  NestingTooDeep { limit: usize, span: Span },
}

/// Failure to construct a [`Parser`](super::Parser).
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BuildError {
  #[error("Invalid token pattern: {0}")]
  InvalidPattern(#[from] regex::Error),
  #[error("No literal pattern was given")]
  MissingLiteralPattern,
}

impl From<CursorError> for ParseError {
  fn from(err: CursorError) -> Self {
    match err {
      CursorError::Exhausted => ParseError::UnexpectedEOF,
    }
  }
}
