//! Regex-driven tokenizer for operator expressions.

use super::source::{SourceOffset, Span};
use crate::util::{regex_alternation, match_at_start};
use crate::util::regexes::NON_WHITESPACE_RE;

use regex::{Regex, Matches, escape};

use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;

/// Splits input into tokens with a single alternation pattern: the
/// literal pattern first, then each operator token in declaration
/// order, escaped so it matches literally.
#[derive(Clone, Debug)]
pub struct Tokenizer {
  regex: Regex,
}

/// A token, borrowed from the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'s> {
  text: &'s str,
  span: Span,
}

/// Lazy iterator over the tokens of one input string. Produced by
/// [`Tokenizer::tokenize`].
#[derive(Debug)]
pub struct Tokens<'r, 's> {
  matches: Matches<'r, 's>,
}

impl Tokenizer {
  pub fn new<'a, I>(literal_pattern: &str, operator_tokens: I) -> Result<Self, regex::Error>
  where I : IntoIterator<Item = &'a str> {
    let patterns = std::iter::once(literal_pattern.to_owned())
      .chain(operator_tokens.into_iter().map(escape));
    let regex = regex_alternation(patterns)?;
    Ok(Self { regex })
  }

  /// The compiled alternation pattern.
  pub fn as_regex(&self) -> &Regex {
    &self.regex
  }

  /// Scans `input` left to right for non-overlapping tokens.
  /// Characters which no alternative matches are skipped, and empty
  /// matches are never produced.
  pub fn tokenize<'r, 's>(&'r self, input: &'s str) -> Tokens<'r, 's> {
    Tokens { matches: self.regex.find_iter(input) }
  }

  /// The text the tokenizer would read at the very start of `text`,
  /// if any. An operator token whose own text does not come back from
  /// this function is unreachable: an earlier alternative always wins.
  pub fn token_at_start<'s>(&self, text: &'s str) -> Option<&'s str> {
    match_at_start(&self.regex, text)
  }

  /// Finds the first non-whitespace character of `input` which is not
  /// covered by any token.
  pub fn first_unmatched(&self, input: &str) -> Option<(char, SourceOffset)> {
    let mut gap_start = 0;
    let token_bounds = self.regex.find_iter(input)
      .map(|m| (m.start(), m.end()))
      .chain(std::iter::once((input.len(), input.len())));
    for (start, end) in token_bounds {
      let gap = &input[gap_start..start];
      if let Some(m) = NON_WHITESPACE_RE.find(gap) {
        let ch = m.as_str().chars().next()?;
        return Some((ch, SourceOffset(gap_start) + m.start()));
      }
      gap_start = end;
    }
    None
  }
}

impl<'s> Token<'s> {
  pub fn new(text: &'s str, span: Span) -> Self {
    Self { text, span }
  }

  pub fn as_str(&self) -> &'s str {
    self.text
  }

  pub fn span(&self) -> Span {
    self.span
  }
}

impl<'r, 's> Iterator for Tokens<'r, 's> {
  type Item = Token<'s>;

  fn next(&mut self) -> Option<Token<'s>> {
    loop {
      let m = self.matches.next()?;
      if !m.is_empty() {
        return Some(Token::new(m.as_str(), Span::of_match(&m)));
      }
    }
  }
}

impl<'r, 's> FusedIterator for Tokens<'r, 's> {}

impl<'s> PartialEq<str> for Token<'s> {
  fn eq(&self, other: &str) -> bool {
    self.text == other
  }
}

impl<'s, 'a> PartialEq<&'a str> for Token<'s> {
  fn eq(&self, other: &&'a str) -> bool {
    self.text == *other
  }
}

impl<'s> Display for Token<'s> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_tokenizer() -> Tokenizer {
    Tokenizer::new("[0-9]+", ["+", "*", "~", "(", ")"]).unwrap()
  }

  fn texts(tokenizer: &Tokenizer, input: &str) -> Vec<String> {
    tokenizer.tokenize(input).map(|t| t.as_str().to_owned()).collect()
  }

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  #[test]
  fn test_tokenize() {
    let tokenizer = sample_tokenizer();
    assert_eq!(
      texts(&tokenizer, "1 + ~(2 + 3) * 4 + 5"),
      vec!["1", "+", "~", "(", "2", "+", "3", ")", "*", "4", "+", "5"],
    );
  }

  #[test]
  fn test_tokenize_spans() {
    let tokenizer = sample_tokenizer();
    let tokens: Vec<_> = tokenizer.tokenize("12 *3").collect();
    assert_eq!(tokens, vec![
      Token::new("12", span(0, 2)),
      Token::new("*", span(3, 4)),
      Token::new("3", span(4, 5)),
    ]);
  }

  #[test]
  fn test_tokenize_empty() {
    let tokenizer = sample_tokenizer();
    assert_eq!(tokenizer.tokenize("").count(), 0);
    assert_eq!(tokenizer.tokenize("   \t").count(), 0);
  }

  #[test]
  fn test_tokenize_skips_unmatched() {
    let tokenizer = sample_tokenizer();
    assert_eq!(texts(&tokenizer, "1 ? 2 & 3"), vec!["1", "2", "3"]);
  }

  #[test]
  fn test_tokenize_is_restartable() {
    let tokenizer = sample_tokenizer();
    let input = "1+2";
    assert_eq!(texts(&tokenizer, input), texts(&tokenizer, input));
  }

  #[test]
  fn test_operator_text_is_escaped() {
    let tokenizer = Tokenizer::new("[0-9]+", ["**", ".", "|"]).unwrap();
    assert_eq!(texts(&tokenizer, "2**3.4|5"), vec!["2", "**", "3", ".", "4", "|", "5"]);
    // "." must not match arbitrary characters.
    assert_eq!(texts(&tokenizer, "a"), Vec::<String>::new());
  }

  #[test]
  fn test_earlier_alternative_wins() {
    let tokenizer = Tokenizer::new("[0-9]+", ["*", "**"]).unwrap();
    assert_eq!(texts(&tokenizer, "2**3"), vec!["2", "*", "*", "3"]);
    let tokenizer = Tokenizer::new("[0-9]+", ["**", "*"]).unwrap();
    assert_eq!(texts(&tokenizer, "2**3*4"), vec!["2", "**", "3", "*", "4"]);
  }

  #[test]
  fn test_empty_literal_matches_are_dropped() {
    let tokenizer = Tokenizer::new("[0-9]*", ["+"]).unwrap();
    assert_eq!(texts(&tokenizer, "12"), vec!["12"]);
    assert_eq!(texts(&tokenizer, ""), Vec::<String>::new());
    assert_eq!(texts(&tokenizer, "  "), Vec::<String>::new());
  }

  #[test]
  fn test_invalid_literal_pattern() {
    assert!(Tokenizer::new("[0-9", ["+"]).is_err());
  }

  #[test]
  fn test_token_at_start() {
    let tokenizer = Tokenizer::new("[a-z]+", ["*", "**", "and"]).unwrap();
    assert_eq!(tokenizer.token_at_start("**"), Some("*"));
    assert_eq!(tokenizer.token_at_start("and"), Some("and"));
    assert_eq!(tokenizer.token_at_start(" and"), None);
  }

  #[test]
  fn test_first_unmatched() {
    let tokenizer = sample_tokenizer();
    assert_eq!(tokenizer.first_unmatched("1 + 2"), None);
    assert_eq!(tokenizer.first_unmatched("  "), None);
    assert_eq!(tokenizer.first_unmatched(""), None);
    assert_eq!(tokenizer.first_unmatched("1 + x"), Some(('x', SourceOffset(4))));
    assert_eq!(tokenizer.first_unmatched("?1"), Some(('?', SourceOffset(0))));
    assert_eq!(tokenizer.first_unmatched("1 é 2"), Some(('é', SourceOffset(2))));
  }

  #[test]
  fn test_token_eq_str() {
    let token = Token::new("+", span(0, 1));
    assert_eq!(token, "+");
    assert_ne!(token, "-");
  }
}
