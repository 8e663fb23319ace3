//! Fixity declarations for operators.

use super::{UnaryFn, BinaryFn};
use super::associativity::Associativity;
use super::precedence::Precedence;

use std::fmt::{self, Debug, Display, Formatter};

/// Everything the parser knows about one operator token. A token can
/// be prefix, infix, postfix, or any combination thereof (`-` is
/// commonly both prefix and infix), and each role carries its own
/// precedence and evaluation function.
#[derive(Clone, Debug, Default)]
pub struct Fixity {
  as_prefix: Option<PrefixProperties>,
  as_infix: Option<InfixProperties>,
  as_postfix: Option<PostfixProperties>,
}

/// Unlike prefix and postfix operators, infix operators have both
/// associativity and precedence.
#[derive(Clone)]
pub struct InfixProperties {
  assoc: Associativity,
  prec: Precedence,
  eval: BinaryFn,
}

#[derive(Clone)]
pub struct PrefixProperties {
  prec: Precedence,
  eval: UnaryFn,
}

#[derive(Clone)]
pub struct PostfixProperties {
  prec: Precedence,
  eval: UnaryFn,
}

/// One of the three ways an operator can be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixityType {
  Prefix,
  Infix,
  Postfix,
}

impl Fixity {
  pub fn new() -> Fixity {
    Fixity::default()
  }

  pub fn with_prefix(mut self, props: PrefixProperties) -> Fixity {
    self.as_prefix = Some(props);
    self
  }

  pub fn with_infix(mut self, props: InfixProperties) -> Fixity {
    self.as_infix = Some(props);
    self
  }

  pub fn with_postfix(mut self, props: PostfixProperties) -> Fixity {
    self.as_postfix = Some(props);
    self
  }

  pub fn as_prefix(&self) -> Option<&PrefixProperties> {
    self.as_prefix.as_ref()
  }

  pub fn as_infix(&self) -> Option<&InfixProperties> {
    self.as_infix.as_ref()
  }

  pub fn as_postfix(&self) -> Option<&PostfixProperties> {
    self.as_postfix.as_ref()
  }
}

impl InfixProperties {
  pub fn new(assoc: Associativity, prec: Precedence, eval: BinaryFn) -> Self {
    Self { assoc, prec, eval }
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn apply(&self, left: f64, right: f64) -> f64 {
    (self.eval)(left, right)
  }
}

impl PrefixProperties {
  pub fn new(prec: Precedence, eval: UnaryFn) -> Self {
    Self { prec, eval }
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn apply(&self, operand: f64) -> f64 {
    (self.eval)(operand)
  }
}

impl PostfixProperties {
  pub fn new(prec: Precedence, eval: UnaryFn) -> Self {
    Self { prec, eval }
  }

  /// The declared precedence. Postfix operators always bind to the
  /// operand accumulated so far, so the parser never consults this.
  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn apply(&self, operand: f64) -> f64 {
    (self.eval)(operand)
  }
}

impl FixityType {
  /// The number of operands an application of this fixity takes.
  pub fn arity(self) -> usize {
    match self {
      FixityType::Prefix | FixityType::Postfix => 1,
      FixityType::Infix => 2,
    }
  }
}

impl Display for FixityType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      FixityType::Prefix => write!(f, "prefix"),
      FixityType::Infix => write!(f, "infix"),
      FixityType::Postfix => write!(f, "postfix"),
    }
  }
}

impl Debug for InfixProperties {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("InfixProperties")
      .field("assoc", &self.assoc)
      .field("prec", &self.prec)
      .finish_non_exhaustive()
  }
}

impl Debug for PrefixProperties {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("PrefixProperties")
      .field("prec", &self.prec)
      .finish_non_exhaustive()
  }
}

impl Debug for PostfixProperties {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("PostfixProperties")
      .field("prec", &self.prec)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::sync::Arc;

  fn negate() -> PrefixProperties {
    PrefixProperties::new(Precedence::new(3), Arc::new(|x: f64| -x))
  }

  fn minus() -> InfixProperties {
    InfixProperties::new(Associativity::Left, Precedence::new(1), Arc::new(|a: f64, b: f64| a - b))
  }

  #[test]
  fn test_empty_fixity() {
    let fixity = Fixity::new();
    assert!(fixity.as_prefix().is_none());
    assert!(fixity.as_infix().is_none());
    assert!(fixity.as_postfix().is_none());
  }

  #[test]
  fn test_prefix_and_infix() {
    let fixity = Fixity::new().with_prefix(negate()).with_infix(minus());
    assert!(fixity.as_postfix().is_none());
    assert_eq!(fixity.as_prefix().unwrap().precedence(), Precedence::new(3));
    assert_eq!(fixity.as_infix().unwrap().precedence(), Precedence::new(1));
  }

  #[test]
  fn test_apply() {
    let fixity = Fixity::new().with_prefix(negate()).with_infix(minus());
    assert_eq!(fixity.as_prefix().unwrap().apply(2.0), -2.0);
    assert_eq!(fixity.as_infix().unwrap().apply(5.0, 3.0), 2.0);
  }

  #[test]
  fn test_arity() {
    assert_eq!(FixityType::Prefix.arity(), 1);
    assert_eq!(FixityType::Infix.arity(), 2);
    assert_eq!(FixityType::Postfix.arity(), 1);
  }
}
