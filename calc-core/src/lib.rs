//! Arithmetic core for the command-line calculator.
//!
//! This crate provides the operation dispatcher, the result formatting
//! rule, and the JSON request handling shared by the `calc` binaries.

/// Error types returned by the dispatcher
pub mod error;
/// Result rendering
pub mod format;
/// JSON request/response plumbing over stdin and stdout
pub mod ipc;
/// Operation identifiers and the dispatcher
pub mod operation;
/// Operation requests and their serializable outcome
pub mod request;

pub use error::CalcError;
pub use format::format_result;
pub use operation::{evaluate, evaluate_named, Operation};
pub use request::{Evaluation, OperationRequest};
