use thiserror::Error;

/// Error type for arithmetic dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
  /// The divisor of a division was exactly zero
  #[error("division by zero is not allowed")]
  DivisionByZero,
  /// An operation name outside the supported set
  #[error("invalid operation '{0}' (expected add, subtract, multiply or divide)")]
  InvalidOperation(String),
}
