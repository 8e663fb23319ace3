
use super::precedence::Precedence;

use std::fmt::{self, Display, Formatter};

/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
  /// `a # b # c` groups as `(a # b) # c`.
  Left,
  /// `a # b # c` groups as `a # (b # c)`.
  Right,
}

impl Associativity {
  /// Whether an operator with this associativity and precedence
  /// `prec` may extend an operand which is being parsed at minimum
  /// precedence `min_prec`.
  ///
  /// A right-associative operator continues at its own precedence
  /// level, so a chain of applications nests to the right. A
  /// left-associative one needs strictly higher precedence, so an
  /// equal-precedence application folds back into the caller.
  pub fn binds_within(self, prec: Precedence, min_prec: Precedence) -> bool {
    match self {
      Associativity::Left => prec > min_prec,
      Associativity::Right => prec >= min_prec,
    }
  }
}

impl Display for Associativity {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Associativity::Left => write!(f, "left"),
      Associativity::Right => write!(f, "right"),
    }
  }
}
