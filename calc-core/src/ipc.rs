use crate::error::CalcError;
use crate::request::{Evaluation, OperationRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use thiserror::Error;
use tracing::debug;

/// Error type for IPC operations
#[derive(Debug, Error)]
pub enum IpcError {
  /// IO operation failed
  #[error("IO error: {0}")]
  IoError(#[from] io::Error),
  /// JSON serialization/deserialization failed
  #[error("Serialization error: {0}")]
  SerializationError(#[from] serde_json::Error),
  /// Invalid input provided to IPC function
  #[error("Invalid input: {0}")]
  InvalidInput(String),
  /// The request was well formed but could not be evaluated
  #[error(transparent)]
  Calc(#[from] CalcError),
}

/// Response line written back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
  /// Whether the request was evaluated
  pub success: bool,
  /// Raw result, `null` on failure or when not representable in JSON
  pub result: Option<f64>,
  /// Result rendered the same way the `calc` binary prints it
  pub display: Option<String>,
  /// Error message on failure
  pub error: Option<String>,
}

impl Response {
  /// Build a success response from an evaluation
  #[must_use]
  pub fn success(evaluation: &Evaluation) -> Self {
    Self {
      success: true,
      result: Some(evaluation.result),
      display: Some(evaluation.display.clone()),
      error: None,
    }
  }

  /// Build a failure response carrying `message`
  #[must_use]
  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      result: None,
      display: None,
      error: Some(message.into()),
    }
  }
}

/// Read a JSON document from `reader`. Blank input yields `None`.
pub fn read_json<T, R>(mut reader: R) -> Result<Option<T>, IpcError>
where
  T: DeserializeOwned,
  R: Read,
{
  let mut input = String::new();
  reader.read_to_string(&mut input)?;

  if input.trim().is_empty() {
    return Ok(None);
  }

  let parsed: T = serde_json::from_str(&input)?;
  Ok(Some(parsed))
}

/// Write `data` as a single JSON line and flush.
pub fn write_json<T, W>(mut writer: W, data: &T) -> Result<(), IpcError>
where
  T: Serialize,
  W: Write,
{
  let json = serde_json::to_string(data)?;
  writeln!(writer, "{json}")?;
  writer.flush()?;
  Ok(())
}

/// Evaluate a decoded request, requiring that one was provided.
pub fn process_request(input: Option<OperationRequest>) -> Result<Evaluation, IpcError> {
  let request =
    input.ok_or_else(|| IpcError::InvalidInput("Input is required but was not provided".to_string()))?;
  debug!(%request, "processing request");
  Ok(request.evaluate()?)
}

/// Read one request from `reader`, evaluate it and write the response to `writer`.
///
/// A response is written whether or not the evaluation succeeds; the
/// returned `Result` tells the caller which exit code to use.
pub fn handle_json_ipc<R, W>(reader: R, writer: W) -> Result<Evaluation, IpcError>
where
  R: Read,
  W: Write,
{
  let outcome = read_json(reader).and_then(process_request);

  let response = match &outcome {
    Ok(evaluation) => Response::success(evaluation),
    Err(err) => Response::failure(err.to_string()),
  };
  write_json(writer, &response)?;

  outcome
}
