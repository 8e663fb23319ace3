
use std::fmt::{self, Display, Formatter};

/// The precedence of an operator. Operators with higher precedence
/// bind more tightly.
///
/// A full expression is parsed at [`Precedence::MIN`]. Since a
/// left-associative operator only continues an expression whose
/// minimum precedence is strictly below its own, a left-associative
/// operator declared at `MIN` can never appear outside of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Precedence(i64);

impl Precedence {
  pub const MIN: Precedence = Precedence(0);

  pub const fn new(n: i64) -> Precedence {
    Precedence(n)
  }

  pub const fn value(self) -> i64 {
    self.0
  }
}

impl From<i64> for Precedence {
  fn from(n: i64) -> Precedence {
    Precedence::new(n)
  }
}

impl From<i32> for Precedence {
  fn from(n: i32) -> Precedence {
    Precedence::new(n.into())
  }
}

impl Display for Precedence {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
