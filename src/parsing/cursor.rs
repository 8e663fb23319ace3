
//! One-item lookahead over an arbitrary iterator.

use thiserror::Error;

use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

/// A cursor over an iterator which always holds the next unconsumed
/// item, so a consumer can inspect it before deciding whether to
/// consume it.
///
/// The cursor pulls from the underlying iterator exactly once per
/// consumed item and never rewinds it.
pub struct LookaheadCursor<I: Iterator> {
  iter: I,
  lookahead: Option<I::Item>,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CursorError {
  #[error("Attempted to advance past the end of input")]
  Exhausted,
}

impl<I: Iterator> LookaheadCursor<I> {
  /// Wraps the iterator, immediately pulling its first item. If the
  /// iterator is empty, the cursor starts at the end.
  pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
    let mut iter = iter.into_iter();
    let lookahead = iter.next();
    Self { iter, lookahead }
  }

  /// The current lookahead item, or `None` if the cursor is at the
  /// end of input.
  pub fn peek(&self) -> Option<&I::Item> {
    self.lookahead.as_ref()
  }

  pub fn at_end(&self) -> bool {
    self.lookahead.is_none()
  }

  /// Consumes and returns the current lookahead item, pulling the
  /// following one from the underlying iterator.
  pub fn advance(&mut self) -> Result<I::Item, CursorError> {
    let current = self.lookahead.take().ok_or(CursorError::Exhausted)?;
    self.lookahead = self.iter.next();
    Ok(current)
  }

  /// If the lookahead equals `expected`, consumes it and returns
  /// true. Otherwise, leaves the cursor unchanged and returns false.
  pub fn eat<Q>(&mut self, expected: &Q) -> bool
  where I::Item: PartialEq<Q>,
        Q: ?Sized {
    if matches!(&self.lookahead, Some(item) if item == expected) {
      self.advance().is_ok()
    } else {
      false
    }
  }
}

impl<I: Iterator> Iterator for LookaheadCursor<I> {
  type Item = I::Item;

  fn next(&mut self) -> Option<I::Item> {
    self.advance().ok()
  }
}

impl<I> Debug for LookaheadCursor<I>
where I: Iterator + Debug,
      I::Item: Debug {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("LookaheadCursor")
      .field("iter", &self.iter)
      .field("lookahead", &self.lookahead)
      .finish()
  }
}

impl<I: Iterator> FusedIterator for LookaheadCursor<I> {}

#[cfg(test)]
mod tests {
  use super::*;

  /// Iterator which counts how many times it has been pulled from.
  struct Counting<'a> {
    remaining: std::ops::Range<i32>,
    pulls: &'a std::cell::Cell<usize>,
  }

  impl<'a> Iterator for Counting<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
      self.pulls.set(self.pulls.get() + 1);
      self.remaining.next()
    }
  }

  #[test]
  fn test_empty_source_starts_at_end() {
    let mut cursor = LookaheadCursor::new(Vec::<i32>::new());
    assert!(cursor.at_end());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.advance(), Err(CursorError::Exhausted));
  }

  #[test]
  fn test_peek_does_not_consume() {
    let cursor = LookaheadCursor::new(vec![1, 2, 3]);
    assert_eq!(cursor.peek(), Some(&1));
    assert_eq!(cursor.peek(), Some(&1));
    assert!(!cursor.at_end());
  }

  #[test]
  fn test_advance_until_exhausted() {
    let mut cursor = LookaheadCursor::new(vec![1, 2]);
    assert_eq!(cursor.advance(), Ok(1));
    assert_eq!(cursor.peek(), Some(&2));
    assert_eq!(cursor.advance(), Ok(2));
    assert!(cursor.at_end());
    assert_eq!(cursor.advance(), Err(CursorError::Exhausted));
    assert_eq!(cursor.advance(), Err(CursorError::Exhausted));
  }

  #[test]
  fn test_eat() {
    let mut cursor = LookaheadCursor::new(vec!["(", "1", ")"]);
    assert!(!cursor.eat(&")"));
    assert_eq!(cursor.peek(), Some(&"("));
    assert!(cursor.eat(&"("));
    assert_eq!(cursor.peek(), Some(&"1"));
    assert!(cursor.eat(&"1"));
    assert!(cursor.eat(&")"));
    assert!(cursor.at_end());
    assert!(!cursor.eat(&")"));
  }

  #[test]
  fn test_pulls_once_per_item() {
    let pulls = std::cell::Cell::new(0);
    let mut cursor = LookaheadCursor::new(Counting { remaining: 0..3, pulls: &pulls });
    assert_eq!(pulls.get(), 1);
    cursor.peek();
    cursor.at_end();
    assert_eq!(pulls.get(), 1);
    cursor.advance().unwrap();
    assert_eq!(pulls.get(), 2);
  }

  #[test]
  fn test_iterates_remaining_items() {
    let mut cursor = LookaheadCursor::new(vec![1, 2, 3, 4]);
    cursor.advance().unwrap();
    assert_eq!(cursor.collect::<Vec<_>>(), vec![2, 3, 4]);
  }
}
