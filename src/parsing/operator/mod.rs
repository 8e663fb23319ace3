
mod precedence;
mod associativity;
mod fixity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use fixity::{Fixity, FixityType, InfixProperties, PrefixProperties, PostfixProperties};
pub use table::OperatorTable;

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

/// Evaluation function of a prefix or postfix operator.
pub type UnaryFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Evaluation function of a binary operator.
pub type BinaryFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// A declaration of one operator, as supplied when building a
/// [`Parser`](crate::parsing::Parser).
#[derive(Clone)]
pub enum Operator {
  Binary {
    token: String,
    assoc: Associativity,
    prec: Precedence,
    eval: BinaryFn,
  },
  UnaryPrefix {
    token: String,
    prec: Precedence,
    eval: UnaryFn,
  },
  UnaryPostfix {
    token: String,
    prec: Precedence,
    eval: UnaryFn,
  },
  /// A pair of brackets. Groups are purely structural and have no
  /// precedence or evaluation function.
  Group {
    open: String,
    close: String,
  },
}

impl Operator {
  pub fn binary<F>(
    token: impl Into<String>,
    assoc: Associativity,
    prec: impl Into<Precedence>,
    eval: F,
  ) -> Self
  where F: Fn(f64, f64) -> f64 + Send + Sync + 'static {
    Operator::Binary { token: token.into(), assoc, prec: prec.into(), eval: Arc::new(eval) }
  }

  pub fn prefix<F>(token: impl Into<String>, prec: impl Into<Precedence>, eval: F) -> Self
  where F: Fn(f64) -> f64 + Send + Sync + 'static {
    Operator::UnaryPrefix { token: token.into(), prec: prec.into(), eval: Arc::new(eval) }
  }

  pub fn postfix<F>(token: impl Into<String>, prec: impl Into<Precedence>, eval: F) -> Self
  where F: Fn(f64) -> f64 + Send + Sync + 'static {
    Operator::UnaryPostfix { token: token.into(), prec: prec.into(), eval: Arc::new(eval) }
  }

  pub fn group(open: impl Into<String>, close: impl Into<String>) -> Self {
    Operator::Group { open: open.into(), close: close.into() }
  }

  /// The token strings introduced by this declaration, in the order
  /// the tokenizer tries them. Groups introduce two tokens.
  pub fn tokens(&self) -> Vec<&str> {
    match self {
      Operator::Binary { token, .. } |
      Operator::UnaryPrefix { token, .. } |
      Operator::UnaryPostfix { token, .. } => vec![token.as_str()],
      Operator::Group { open, close } => vec![open.as_str(), close.as_str()],
    }
  }
}

impl Debug for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Operator::Binary { token, assoc, prec, .. } => {
        f.debug_struct("Binary")
          .field("token", token)
          .field("assoc", assoc)
          .field("prec", prec)
          .finish_non_exhaustive()
      }
      Operator::UnaryPrefix { token, prec, .. } => {
        f.debug_struct("UnaryPrefix").field("token", token).field("prec", prec).finish_non_exhaustive()
      }
      Operator::UnaryPostfix { token, prec, .. } => {
        f.debug_struct("UnaryPostfix").field("token", token).field("prec", prec).finish_non_exhaustive()
      }
      Operator::Group { open, close } => {
        f.debug_struct("Group").field("open", open).field("close", close).finish()
      }
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Operator::Binary { token, assoc, prec, .. } => write!(f, "{token} (infix, {assoc}, {prec})"),
      Operator::UnaryPrefix { token, prec, .. } => write!(f, "{token} (prefix, {prec})"),
      Operator::UnaryPostfix { token, prec, .. } => write!(f, "{token} (postfix, {prec})"),
      Operator::Group { open, close } => write!(f, "{open} {close} (group)"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokens() {
    assert_eq!(Operator::binary("+", Associativity::Left, 1, |a, b| a + b).tokens(), vec!["+"]);
    assert_eq!(Operator::prefix("~", 3, |a| -a).tokens(), vec!["~"]);
    assert_eq!(Operator::group("(", ")").tokens(), vec!["(", ")"]);
  }

  #[test]
  fn test_display() {
    assert_eq!(Operator::binary("^", Associativity::Right, 3, f64::powf).to_string(), "^ (infix, right, 3)");
    assert_eq!(Operator::postfix("!", 5, |a| a).to_string(), "! (postfix, 5)");
    assert_eq!(Operator::group("(", ")").to_string(), "( ) (group)");
  }
}
