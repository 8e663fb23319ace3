
//! A configurable operator-precedence expression parser.
//!
//! A [`Parser`] is built from a regular expression for literals and a
//! list of [`Operator`] declarations (binary, prefix, postfix, and
//! bracketed groups). It tokenizes input, parses it by precedence
//! climbing into an [`Ast`], and evaluates the tree by calling the
//! function registered for each operator.

pub mod ast;
pub mod error;
pub mod eval;
pub mod parsing;
pub mod presets;
pub mod util;

pub use ast::Ast;
pub use error::Error;
pub use eval::EvalError;
pub use parsing::{Parser, ParserBuilder, ParseError, BuildError, UnmatchedInput};
pub use parsing::operator::{Operator, Associativity, Precedence};
