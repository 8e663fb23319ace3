//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

/// Matches a single non-whitespace character.
pub static NON_WHITESPACE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\S").unwrap());
