
//! Ready-made operator sets.

use crate::parsing::Parser;
use crate::parsing::operator::{Operator, Associativity};

use once_cell::sync::Lazy;

static BASIC_ARITHMETIC: Lazy<Parser> = Lazy::new(|| {
  Parser::new(r"[0-9]+", vec![
    Operator::binary("+", Associativity::Left, 1, |a, b| a + b),
    Operator::binary("*", Associativity::Left, 2, |a, b| a * b),
    Operator::prefix("~", 3, |a| -a),
    Operator::group("(", ")"),
  ]).expect("basic arithmetic operator set should compile")
});

static SCIENTIFIC: Lazy<Parser> = Lazy::new(|| {
  Parser::new(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?", vec![
    Operator::binary("+", Associativity::Left, 1, |a, b| a + b),
    Operator::binary("-", Associativity::Left, 1, |a, b| a - b),
    Operator::binary("*", Associativity::Left, 2, |a, b| a * b),
    Operator::binary("/", Associativity::Left, 2, |a, b| a / b),
    Operator::binary("%", Associativity::Left, 2, |a, b| a % b),
    Operator::binary("^", Associativity::Right, 3, f64::powf),
    Operator::prefix("-", 4, |a| -a),
    Operator::prefix("~", 4, |a| -a),
    Operator::postfix("!", 5, factorial),
    Operator::group("(", ")"),
    Operator::group("[", "]"),
  ]).expect("scientific operator set should compile")
});

/// Integers with `+` and `*` (left-associative, precedence 1 and 2),
/// prefix negation `~` at precedence 3, and parentheses.
pub fn basic_arithmetic() -> Parser {
  BASIC_ARITHMETIC.clone()
}

/// Decimal literals with optional exponent, the four arithmetic
/// operators and `%` (left-associative), right-associative `^`,
/// prefix `-` and `~`, postfix factorial `!`, and both parentheses
/// and square brackets for grouping.
pub fn scientific() -> Parser {
  SCIENTIFIC.clone()
}

/// Factorial of a non-negative integer. Anything else is NaN, and
/// results too large for `f64` are infinite.
fn factorial(n: f64) -> f64 {
  if n < 0.0 || n.fract() != 0.0 {
    return f64::NAN;
  }
  let mut acc: f64 = 1.0;
  let mut i: f64 = 2.0;
  while i <= n && acc.is_finite() {
    acc *= i;
    i += 1.0;
  }
  acc
}
