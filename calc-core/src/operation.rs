use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// The four arithmetic operations the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Operation {
  /// `a + b`
  Add,
  /// `a - b`
  Subtract,
  /// `a * b`
  Multiply,
  /// `a / b`, failing when `b` is zero
  Divide,
}

impl Operation {
  /// Every supported operation, in help-text order
  pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

  /// Canonical lowercase name
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Add => "add",
      Self::Subtract => "subtract",
      Self::Multiply => "multiply",
      Self::Divide => "divide",
    }
  }

  /// Infix symbol used when rendering a request
  #[must_use]
  pub const fn symbol(self) -> char {
    match self {
      Self::Add => '+',
      Self::Subtract => '-',
      Self::Multiply => '*',
      Self::Divide => '/',
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Operation {
  type Err = CalcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "add" | "+" => Ok(Self::Add),
      "subtract" | "sub" | "-" => Ok(Self::Subtract),
      "multiply" | "mul" | "*" | "x" => Ok(Self::Multiply),
      "divide" | "div" | "/" => Ok(Self::Divide),
      _ => Err(CalcError::InvalidOperation(s.to_string())),
    }
  }
}

impl TryFrom<String> for Operation {
  type Error = CalcError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

/// Evaluate `a <operation> b`.
///
/// Division fails with [`CalcError::DivisionByZero`] only when `b` is exactly
/// zero (either sign). Every other IEEE-754 outcome, including infinities
/// and NaN, is returned as a success.
pub fn evaluate(operation: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
  debug!(%operation, a, b, "evaluating");

  let result = match operation {
    Operation::Add => a + b,
    Operation::Subtract => a - b,
    Operation::Multiply => a * b,
    Operation::Divide => {
      if b == 0.0 {
        debug!(a, "rejecting division by zero");
        return Err(CalcError::DivisionByZero);
      }
      a / b
    }
  };

  trace!(result, "evaluated");
  Ok(result)
}

/// Parse an operation name and evaluate it.
pub fn evaluate_named(name: &str, a: f64, b: f64) -> Result<f64, CalcError> {
  let operation: Operation = name.parse()?;
  evaluate(operation, a, b)
}
