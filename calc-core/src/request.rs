use crate::error::CalcError;
use crate::format::format_result;
use crate::operation::{evaluate, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One calculation: an operation and its two operands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
  /// Which arithmetic operation to run
  pub operation: Operation,
  /// Left operand
  pub a: f64,
  /// Right operand
  pub b: f64,
}

impl OperationRequest {
  /// Create a request
  #[must_use]
  pub const fn new(operation: Operation, a: f64, b: f64) -> Self {
    Self { operation, a, b }
  }

  /// Run the request through the dispatcher.
  pub fn evaluate(&self) -> Result<Evaluation, CalcError> {
    let result = evaluate(self.operation, self.a, self.b)?;
    Ok(Evaluation {
      operation: self.operation,
      a: self.a,
      b: self.b,
      result,
      display: format_result(result),
    })
  }
}

impl fmt::Display for OperationRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} {}",
      format_result(self.a),
      self.operation.symbol(),
      format_result(self.b)
    )
  }
}

/// A successful calculation, as emitted by `--format json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
  /// Operation that was run
  pub operation: Operation,
  /// Left operand
  pub a: f64,
  /// Right operand
  pub b: f64,
  /// Raw IEEE-754 result
  pub result: f64,
  /// `result` rendered with [`format_result`]
  pub display: String,
}
