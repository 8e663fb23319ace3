use super::{Operator, UnaryFn, BinaryFn};
use super::fixity::{Fixity, InfixProperties, PrefixProperties, PostfixProperties};
use super::precedence::Precedence;
use super::associativity::Associativity;

use std::collections::HashMap;

/// A table of operators, indexed by their token text.
///
/// Declaring the same token twice in the same role replaces the
/// earlier declaration. Declaring it in different roles (say, `-` as
/// both prefix and infix) keeps both.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  by_token: HashMap<String, Fixity>,
  groups: HashMap<String, String>,
  /// Every token, in declaration order. May contain duplicates.
  declared_tokens: Vec<String>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      by_token: HashMap::with_capacity(capacity),
      groups: HashMap::new(),
      declared_tokens: Vec::with_capacity(capacity),
    }
  }

  pub fn insert(&mut self, op: Operator) {
    self.declared_tokens.extend(op.tokens().into_iter().map(str::to_owned));
    match op {
      Operator::Binary { token, assoc, prec, eval } => {
        self.insert_infix(token, assoc, prec, eval);
      }
      Operator::UnaryPrefix { token, prec, eval } => {
        self.insert_prefix(token, prec, eval);
      }
      Operator::UnaryPostfix { token, prec, eval } => {
        self.insert_postfix(token, prec, eval);
      }
      Operator::Group { open, close } => {
        self.groups.insert(open, close);
      }
    }
  }

  fn insert_infix(&mut self, token: String, assoc: Associativity, prec: Precedence, eval: BinaryFn) {
    let entry = self.by_token.entry(token).or_default();
    *entry = std::mem::take(entry).with_infix(InfixProperties::new(assoc, prec, eval));
  }

  fn insert_prefix(&mut self, token: String, prec: Precedence, eval: UnaryFn) {
    let entry = self.by_token.entry(token).or_default();
    *entry = std::mem::take(entry).with_prefix(PrefixProperties::new(prec, eval));
  }

  fn insert_postfix(&mut self, token: String, prec: Precedence, eval: UnaryFn) {
    let entry = self.by_token.entry(token).or_default();
    *entry = std::mem::take(entry).with_postfix(PostfixProperties::new(prec, eval));
  }

  pub fn get(&self, token: &str) -> Option<&Fixity> {
    self.by_token.get(token)
  }

  pub fn prefix(&self, token: &str) -> Option<&PrefixProperties> {
    self.get(token).and_then(Fixity::as_prefix)
  }

  pub fn infix(&self, token: &str) -> Option<&InfixProperties> {
    self.get(token).and_then(Fixity::as_infix)
  }

  pub fn postfix(&self, token: &str) -> Option<&PostfixProperties> {
    self.get(token).and_then(Fixity::as_postfix)
  }

  pub fn is_prefix(&self, token: &str) -> bool {
    self.prefix(token).is_some()
  }

  pub fn is_postfix(&self, token: &str) -> bool {
    self.postfix(token).is_some()
  }

  /// If `token` opens a group, returns the token which closes it.
  pub fn group_close(&self, token: &str) -> Option<&str> {
    self.groups.get(token).map(String::as_str)
  }

  /// All operator and group tokens, in the order they were declared.
  pub fn declared_tokens(&self) -> impl Iterator<Item = &str> {
    self.declared_tokens.iter().map(String::as_str)
  }

  /// Number of distinct tokens with at least one fixity, plus the
  /// number of group pairs.
  pub fn len(&self) -> usize {
    self.by_token.len() + self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Extend<Operator> for OperatorTable {
  fn extend<I>(&mut self, iter: I)
  where I : IntoIterator<Item = Operator> {
    for op in iter {
      self.insert(op);
    }
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    table.extend(iter);
    table
  }
}
