
//! Tokenizing and parsing of operator expressions.

pub mod cursor;
pub mod error;
pub mod operator;
pub mod parser;
pub mod source;
pub mod tokenizer;

pub use cursor::{LookaheadCursor, CursorError};
pub use error::{ParseError, BuildError};
pub use parser::{Parser, ParserBuilder, UnmatchedInput, ShadowedOperator, DEFAULT_MAX_DEPTH};
pub use tokenizer::{Token, Tokens, Tokenizer};
