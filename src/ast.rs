
//! Syntax trees produced by the operator-precedence parser.

use crate::parsing::operator::FixityType;

use itertools::Itertools;
use serde::{Serialize, Serializer};
use serde::ser::SerializeSeq;

use std::fmt::{self, Display, Formatter};

/// A parsed expression. Interior nodes own their children; there is
/// no sharing between trees.
///
/// The [`Display`] and [`Serialize`] impls render the tree in list
/// form, with the operator first: `1 + 2 * 3` becomes
/// `[+, 1, [*, 2, 3]]`, or `["+","1",["*","2","3"]]` as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
  /// A literal token, such as a numeral.
  Leaf(String),
  /// A prefix operator applied to its operand.
  Prefix(String, Box<Ast>),
  /// A postfix operator applied to its operand.
  Postfix(String, Box<Ast>),
  /// A binary operator applied to its left and right operands.
  Binary(String, Box<Ast>, Box<Ast>),
}

impl Ast {
  pub fn leaf(text: impl Into<String>) -> Self {
    Ast::Leaf(text.into())
  }

  pub fn prefix(op: impl Into<String>, operand: Ast) -> Self {
    Ast::Prefix(op.into(), Box::new(operand))
  }

  pub fn postfix(op: impl Into<String>, operand: Ast) -> Self {
    Ast::Postfix(op.into(), Box::new(operand))
  }

  pub fn binary(op: impl Into<String>, left: Ast, right: Ast) -> Self {
    Ast::Binary(op.into(), Box::new(left), Box::new(right))
  }

  pub fn is_leaf(&self) -> bool {
    matches!(self, Ast::Leaf(_))
  }

  /// The operator token of an interior node, or `None` for a leaf.
  pub fn operator(&self) -> Option<&str> {
    match self {
      Ast::Leaf(_) => None,
      Ast::Prefix(op, _) | Ast::Postfix(op, _) | Ast::Binary(op, _, _) => Some(op.as_str()),
    }
  }

  /// How the operator of an interior node is applied.
  pub fn fixity(&self) -> Option<FixityType> {
    match self {
      Ast::Leaf(_) => None,
      Ast::Prefix(..) => Some(FixityType::Prefix),
      Ast::Postfix(..) => Some(FixityType::Postfix),
      Ast::Binary(..) => Some(FixityType::Infix),
    }
  }

  pub fn children(&self) -> Vec<&Ast> {
    match self {
      Ast::Leaf(_) => vec![],
      Ast::Prefix(_, operand) | Ast::Postfix(_, operand) => vec![&**operand],
      Ast::Binary(_, left, right) => vec![&**left, &**right],
    }
  }

  /// Number of direct children: 0 for a leaf, 1 for a unary node, 2
  /// for a binary node.
  pub fn arity(&self) -> usize {
    self.fixity().map_or(0, FixityType::arity)
  }

  pub fn leaf_count(&self) -> usize {
    match self {
      Ast::Leaf(_) => 1,
      _ => self.children().into_iter().map(Ast::leaf_count).sum(),
    }
  }

  /// Height of the tree. A single leaf has depth 1.
  pub fn depth(&self) -> usize {
    1 + self.children().into_iter().map(Ast::depth).max().unwrap_or(0)
  }
}

impl Display for Ast {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Ast::Leaf(text) => write!(f, "{text}"),
      Ast::Prefix(op, _) | Ast::Postfix(op, _) | Ast::Binary(op, _, _) => {
        write!(f, "[{}, {}]", op, self.children().into_iter().format(", "))
      }
    }
  }
}

impl Serialize for Ast {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Ast::Leaf(text) => serializer.serialize_str(text),
      Ast::Prefix(op, _) | Ast::Postfix(op, _) | Ast::Binary(op, _, _) => {
        let children = self.children();
        let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
        seq.serialize_element(op)?;
        for child in children {
          seq.serialize_element(child)?;
        }
        seq.end()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_ast() -> Ast {
    // 1 + ~2 * 3!
    Ast::binary(
      "+",
      Ast::leaf("1"),
      Ast::binary(
        "*",
        Ast::prefix("~", Ast::leaf("2")),
        Ast::postfix("!", Ast::leaf("3")),
      ),
    )
  }

  #[test]
  fn test_display() {
    assert_eq!(sample_ast().to_string(), "[+, 1, [*, [~, 2], [!, 3]]]");
    assert_eq!(Ast::leaf("42").to_string(), "42");
  }

  #[test]
  fn test_serialize() {
    let json = serde_json::to_string(&sample_ast()).unwrap();
    assert_eq!(json, r#"["+","1",["*",["~","2"],["!","3"]]]"#);
    assert_eq!(serde_json::to_string(&Ast::leaf("7")).unwrap(), r#""7""#);
  }

  #[test]
  fn test_arity_and_operator() {
    let ast = sample_ast();
    assert_eq!(ast.arity(), 2);
    assert_eq!(ast.operator(), Some("+"));
    assert_eq!(ast.fixity(), Some(FixityType::Infix));
    assert_eq!(Ast::prefix("~", Ast::leaf("1")).arity(), 1);
    assert_eq!(Ast::postfix("!", Ast::leaf("1")).fixity(), Some(FixityType::Postfix));
    assert_eq!(Ast::leaf("1").arity(), 0);
    assert_eq!(Ast::leaf("1").operator(), None);
    assert!(Ast::leaf("1").is_leaf());
  }

  #[test]
  fn test_leaf_count_and_depth() {
    let ast = sample_ast();
    assert_eq!(ast.leaf_count(), 3);
    assert_eq!(ast.depth(), 4);
    assert_eq!(Ast::leaf("1").depth(), 1);
  }
}
