
//! Precedence-climbing parser over a configurable operator table.

use super::cursor::LookaheadCursor;
use super::error::{ParseError, BuildError};
use super::operator::{Operator, OperatorTable, Precedence};
use super::tokenizer::{Tokenizer, Token, Tokens};
use crate::ast::Ast;
use crate::error::Error;
use crate::eval::{self, EvalError};

use log::{debug, trace};

/// Default bound on how deeply groups, prefix operators and
/// right-hand operands may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What [`Parser::parse_str`] does with characters that no token
/// covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedInput {
  /// Treat them as insignificant, like whitespace.
  #[default]
  Skip,
  /// Fail with [`ParseError::UnexpectedChar`] on the first
  /// non-whitespace character outside of every token.
  Reject,
}

/// An operator token which the tokenizer can never produce, because
/// an earlier alternative of the token pattern matches a different
/// prefix of its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedOperator {
  /// The declared token.
  pub token: String,
  /// What the tokenizer reads instead, at the start of `token`.
  pub matched: String,
}

/// An operator-precedence parser, built once from a literal pattern
/// and a list of operator declarations.
///
/// A `Parser` is immutable after construction, cheap to clone, and
/// may be shared between threads.
#[derive(Debug, Clone)]
pub struct Parser {
  tokenizer: Tokenizer,
  table: OperatorTable,
  unmatched: UnmatchedInput,
  max_depth: usize,
}

/// Fluent alternative to [`Parser::new`].
#[derive(Debug, Clone)]
pub struct ParserBuilder {
  literal_pattern: Option<String>,
  operators: Vec<Operator>,
  unmatched: UnmatchedInput,
  max_depth: usize,
}

impl Parser {
  /// Builds a parser whose tokens are the matches of `literal_pattern`
  /// together with the text of each operator. On overlap, the literal
  /// pattern wins, then operators in the order given.
  pub fn new<I>(literal_pattern: &str, operators: I) -> Result<Self, BuildError>
  where I : IntoIterator<Item = Operator> {
    let table: OperatorTable = operators.into_iter().collect();
    let tokenizer = Tokenizer::new(literal_pattern, table.declared_tokens())?;
    debug!("Built token pattern {} for {} operator(s)", tokenizer.as_regex(), table.len());
    Ok(Self { tokenizer, table, unmatched: UnmatchedInput::default(), max_depth: DEFAULT_MAX_DEPTH })
  }

  pub fn builder() -> ParserBuilder {
    ParserBuilder::default()
  }

  pub fn with_unmatched_input(mut self, policy: UnmatchedInput) -> Self {
    self.unmatched = policy;
    self
  }

  pub fn unmatched_input(&self) -> UnmatchedInput {
    self.unmatched
  }

  /// Sets the nesting bound. Input nested deeper than this fails with
  /// [`ParseError::NestingTooDeep`] instead of exhausting the stack.
  pub fn with_max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = max_depth;
    self
  }

  pub fn max_depth(&self) -> usize {
    self.max_depth
  }

  pub fn table(&self) -> &OperatorTable {
    &self.table
  }

  pub fn tokenizer(&self) -> &Tokenizer {
    &self.tokenizer
  }

  /// Lazily splits `input` into tokens. Unmatched characters are
  /// skipped regardless of the [`UnmatchedInput`] policy.
  pub fn tokenize<'s>(&self, input: &'s str) -> Tokens<'_, 's> {
    self.tokenizer.tokenize(input)
  }

  /// Fails if `input` contains a non-whitespace character which no
  /// token covers.
  pub fn check_coverage(&self, input: &str) -> Result<(), ParseError> {
    match self.tokenizer.first_unmatched(input) {
      None => Ok(()),
      Some((ch, offset)) => Err(ParseError::UnexpectedChar(ch, offset)),
    }
  }

  /// Parses a complete expression from `tokens`. Tokens left over
  /// after the expression are an error.
  pub fn parse<'s, I>(&self, tokens: I) -> Result<Ast, ParseError>
  where I : IntoIterator<Item = Token<'s>> {
    let mut cursor = LookaheadCursor::new(tokens);
    let ast = self.parse_expr(&mut cursor, Precedence::MIN, 0)?;
    if let Some(token) = cursor.peek() {
      return Err(ParseError::UnexpectedToken { found: token.as_str().to_owned(), span: token.span() });
    }
    Ok(ast)
  }

  /// Tokenizes and parses `input`, honoring the [`UnmatchedInput`]
  /// policy.
  pub fn parse_str(&self, input: &str) -> Result<Ast, ParseError> {
    if self.unmatched == UnmatchedInput::Reject {
      self.check_coverage(input)?;
    }
    self.parse(self.tokenize(input))
  }

  pub fn evaluate(&self, ast: &Ast) -> Result<f64, EvalError> {
    eval::evaluate(&self.table, ast)
  }

  pub fn eval_str(&self, input: &str) -> Result<f64, Error> {
    let ast = self.parse_str(input)?;
    Ok(self.evaluate(&ast)?)
  }

  /// Lists the declared operator tokens which can never come out of
  /// the tokenizer. For instance, `*` declared before `**` shadows
  /// `**`, and a literal pattern like `[a-z]+` shadows `and` only if
  /// it reads something other than exactly `and`.
  pub fn shadowed_operators(&self) -> Vec<ShadowedOperator> {
    self.table.declared_tokens()
      .filter_map(|token| {
        let matched = self.tokenizer.token_at_start(token)?;
        (matched != token).then(|| ShadowedOperator {
          token: token.to_owned(),
          matched: matched.to_owned(),
        })
      })
      .collect()
  }

  /// A group, a prefix operator applied to a primary, or a single
  /// literal token.
  fn parse_primary<'s, I>(&self, cursor: &mut LookaheadCursor<I>, depth: usize) -> Result<Ast, ParseError>
  where I : Iterator<Item = Token<'s>> {
    let token = cursor.peek().ok_or(ParseError::UnexpectedEOF)?;
    if depth > self.max_depth {
      return Err(ParseError::NestingTooDeep { limit: self.max_depth, span: token.span() });
    }
    if let Some(close) = self.table.group_close(token.as_str()) {
      let open = cursor.advance()?;
      trace!("Open group {} at {}", open, open.span());
      let inner = self.parse_expr(cursor, Precedence::MIN, depth + 1)?;
      match cursor.advance() {
        Ok(found) if found == close => Ok(inner),
        Ok(found) => Err(ParseError::MismatchedGroup {
          expected: close.to_owned(),
          found: found.as_str().to_owned(),
          span: found.span(),
        }),
        Err(_) => Err(ParseError::UnclosedGroup { expected: close.to_owned(), open_span: open.span() }),
      }
    } else if self.table.is_prefix(token.as_str()) {
      let op = cursor.advance()?;
      // The operand is a primary, so a following binary or postfix
      // operator applies to the whole prefix application.
      let operand = self.parse_primary(cursor, depth + 1)?;
      trace!("Apply prefix {} at {}", op, op.span());
      Ok(Ast::prefix(op.as_str(), operand))
    } else {
      let literal = cursor.advance()?;
      Ok(Ast::leaf(literal.as_str()))
    }
  }

  fn parse_expr<'s, I>(&self, cursor: &mut LookaheadCursor<I>, min_prec: Precedence, depth: usize) -> Result<Ast, ParseError>
  where I : Iterator<Item = Token<'s>> {
    let mut left = self.parse_primary(cursor, depth)?;
    while let Some(token) = cursor.peek() {
      if let Some(infix) = self.table.infix(token.as_str()) {
        if !infix.associativity().binds_within(infix.precedence(), min_prec) {
          break;
        }
        let op = cursor.advance()?;
        let right = self.parse_expr(cursor, infix.precedence(), depth + 1)?;
        trace!("Fold infix {} at {} (min precedence {})", op, op.span(), min_prec);
        left = Ast::binary(op.as_str(), left, right);
      } else if self.table.is_postfix(token.as_str()) {
        let op = cursor.advance()?;
        trace!("Apply postfix {} at {}", op, op.span());
        left = Ast::postfix(op.as_str(), left);
      } else {
        break;
      }
    }
    Ok(left)
  }
}

impl Default for ParserBuilder {
  fn default() -> Self {
    Self {
      literal_pattern: None,
      operators: Vec::new(),
      unmatched: UnmatchedInput::default(),
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

impl ParserBuilder {
  pub fn literal(mut self, pattern: impl Into<String>) -> Self {
    self.literal_pattern = Some(pattern.into());
    self
  }

  pub fn operator(mut self, op: Operator) -> Self {
    self.operators.push(op);
    self
  }

  pub fn operators(mut self, ops: impl IntoIterator<Item = Operator>) -> Self {
    self.operators.extend(ops);
    self
  }

  pub fn unmatched_input(mut self, policy: UnmatchedInput) -> Self {
    self.unmatched = policy;
    self
  }

  pub fn max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = max_depth;
    self
  }

  pub fn build(self) -> Result<Parser, BuildError> {
    let literal_pattern = self.literal_pattern.ok_or(BuildError::MissingLiteralPattern)?;
    let parser = Parser::new(&literal_pattern, self.operators)?;
    Ok(parser.with_unmatched_input(self.unmatched).with_max_depth(self.max_depth))
  }
}
