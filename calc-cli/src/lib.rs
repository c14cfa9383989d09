//! Command-line front end for the calculator.
//!
//! The `calc` and `calc-ipc` binaries share the argument definitions,
//! configuration and logging setup in this crate.

/// Argument definitions and the top-level run loop
pub mod cli;
/// Configuration derived from the command line
pub mod config;
/// Tracing subscriber setup
pub mod logging;

pub use cli::{run, Cli, Commands, Operands};
pub use config::{CalcConfig, OutputFormat};
