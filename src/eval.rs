//! Evaluation of syntax trees against an operator table.

use crate::ast::Ast;
use crate::parsing::operator::{OperatorTable, FixityType};

use thiserror::Error;

use std::num::ParseFloatError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Failed to parse number '{text}'")]
  ParseNumber {
    text: String,
    #[source]
    source: ParseFloatError,
  },
  #[error("No {fixity} operator '{operator}'")]
  NoSuchOperator {
    operator: String,
    fixity: FixityType,
  },
}

impl EvalError {
  fn no_such_operator(operator: &str, fixity: FixityType) -> Self {
    EvalError::NoSuchOperator { operator: operator.to_owned(), fixity }
  }
}

/// Reduces `ast` bottom-up. Leaves are read as `f64`; each interior
/// node applies the function `table` registers for its operator in
/// the node's fixity.
pub fn evaluate(table: &OperatorTable, ast: &Ast) -> Result<f64, EvalError> {
  match ast {
    Ast::Leaf(text) => {
      text.parse::<f64>().map_err(|source| EvalError::ParseNumber { text: text.to_owned(), source })
    }
    Ast::Prefix(op, operand) => {
      let props = table.prefix(op).ok_or_else(|| EvalError::no_such_operator(op, FixityType::Prefix))?;
      let operand = evaluate(table, operand)?;
      Ok(props.apply(operand))
    }
    Ast::Postfix(op, operand) => {
      let props = table.postfix(op).ok_or_else(|| EvalError::no_such_operator(op, FixityType::Postfix))?;
      let operand = evaluate(table, operand)?;
      Ok(props.apply(operand))
    }
    Ast::Binary(op, left, right) => {
      let props = table.infix(op).ok_or_else(|| EvalError::no_such_operator(op, FixityType::Infix))?;
      let left = evaluate(table, left)?;
      let right = evaluate(table, right)?;
      Ok(props.apply(left, right))
    }
  }
}
