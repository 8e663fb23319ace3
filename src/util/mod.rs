//! Various utility functions.

pub mod regexes;

use regex::Regex;

/// Constructs a regex which matches any of the given patterns. Each
/// pattern is wrapped in a non-capturing group, so alternations inside
/// one pattern cannot leak into its neighbors.
///
/// The patterns are tried in the order given: on overlap, the earliest
/// pattern which matches at a position wins, even if a later one would
/// match a longer string. Callers which want literal text matched must
/// [`escape`](regex::escape) it first.
pub fn regex_alternation<I, S>(patterns: I) -> Result<Regex, regex::Error>
where I : IntoIterator<Item = S>,
      S : AsRef<str> {
  let regex_str = patterns.into_iter()
    .map(|s| format!("(?:{})", s.as_ref()))
    .collect::<Vec<_>>()
    .join("|");
  Regex::new(&regex_str)
}

/// If `regex` matches at the very start of `input`, returns the
/// matched prefix. Matches starting later in the string are ignored.
pub fn match_at_start<'a>(regex: &Regex, input: &'a str) -> Option<&'a str> {
  regex.find(input)
    .filter(|m| m.start() == 0)
    .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_regex_alternation() {
    let re = regex_alternation(["foo", "bar"]).unwrap();
    assert!(re.is_match("foo"));
    assert!(re.is_match("bar"));
    assert!(!re.is_match("baz"));
  }

  #[test]
  fn test_regex_alternation_output() {
    let re = regex_alternation(["[0-9]+", &regex::escape("**"), &regex::escape("(")]).unwrap();
    assert_eq!(re.to_string(), r"(?:[0-9]+)|(?:\*\*)|(?:\()");
  }

  #[test]
  fn test_regex_alternation_first_match_wins() {
    let re = regex_alternation(["a", "aa"]).unwrap();
    assert_eq!(re.find("aa").unwrap().as_str(), "a");
    let re = regex_alternation(["aa", "a"]).unwrap();
    assert_eq!(re.find("aa").unwrap().as_str(), "aa");
  }

  #[test]
  fn test_regex_alternation_isolates_patterns() {
    // Inline flags in one pattern must not apply to the next.
    let re = regex_alternation(["(?i)x", "Y"]).unwrap();
    assert!(re.is_match("X"));
    assert!(re.is_match("Y"));
    assert!(!re.is_match("y"));
  }

  #[test]
  fn test_regex_alternation_invalid() {
    assert!(regex_alternation(["[0-9"]).is_err());
  }

  #[test]
  fn test_match_at_start() {
    let re = Regex::new(r"[0-9]+").unwrap();
    assert_eq!(match_at_start(&re, "123abc"), Some("123"));
    assert_eq!(match_at_start(&re, "abc123"), None);
    assert_eq!(match_at_start(&re, ""), None);
  }
}
