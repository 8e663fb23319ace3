
use crate::eval::EvalError;
use crate::parsing::{BuildError, ParseError};

use thiserror::Error;

/// Any error produced by this crate.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  BuildError(#[from] BuildError),
  #[error("{0}")]
  ParseError(#[from] ParseError),
  #[error("{0}")]
  EvalError(#[from] EvalError),
}
