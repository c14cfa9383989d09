use crate::config::{CalcConfig, OutputFormat};
use anyhow::{Context, Result};
use calc_core::{Operation, OperationRequest};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use tracing::debug;

/// Simple command line calculator
#[derive(Debug, Parser)]
#[command(name = "calc", author, version, about, long_about = None)]
pub struct Cli {
  /// Operation to perform
  #[command(subcommand)]
  pub command: Commands,

  /// Output format
  #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Log to stderr (-v for debug, -vv for trace)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

/// One subcommand per operation
#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Add two numbers (a + b)
  Add(Operands),
  /// Subtract b from a (a - b)
  #[command(alias = "sub")]
  Subtract(Operands),
  /// Multiply two numbers (a * b)
  #[command(alias = "mul")]
  Multiply(Operands),
  /// Divide a by b (a / b)
  #[command(alias = "div")]
  Divide(Operands),
}

/// The two positional operands shared by every subcommand
#[derive(Debug, Clone, Copy, Args)]
pub struct Operands {
  /// First number (a)
  #[arg(value_name = "A", allow_negative_numbers = true)]
  pub a: f64,

  /// Second number (b)
  #[arg(value_name = "B", allow_negative_numbers = true)]
  pub b: f64,
}

impl Commands {
  /// The operation this subcommand selects
  #[must_use]
  pub const fn operation(&self) -> Operation {
    match self {
      Self::Add(_) => Operation::Add,
      Self::Subtract(_) => Operation::Subtract,
      Self::Multiply(_) => Operation::Multiply,
      Self::Divide(_) => Operation::Divide,
    }
  }

  /// Both operands, whichever subcommand was used
  #[must_use]
  pub const fn operands(&self) -> Operands {
    match self {
      Self::Add(ops) | Self::Subtract(ops) | Self::Multiply(ops) | Self::Divide(ops) => *ops,
    }
  }
}

impl Cli {
  /// Build the request described by the parsed arguments
  #[must_use]
  pub const fn request(&self) -> OperationRequest {
    let Operands { a, b } = self.command.operands();
    OperationRequest::new(self.command.operation(), a, b)
  }
}

/// Evaluate `request` and write the result to `out`.
///
/// Evaluation errors are returned to the caller untouched; nothing is
/// written to `out` in that case.
pub fn run<W: Write>(request: &OperationRequest, config: &CalcConfig, out: &mut W) -> Result<()> {
  debug!(%request, format = ?config.format, "running calculation");

  let evaluation = request.evaluate()?;

  match config.format {
    OutputFormat::Text => {
      writeln!(out, "{}", evaluation.display).context("Failed to write result")?;
    }
    OutputFormat::Json => {
      let json = serde_json::to_string(&evaluation).context("Failed to serialize result")?;
      writeln!(out, "{json}").context("Failed to write result")?;
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use calc_core::CalcError;

  fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["calc"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
  }

  fn run_args(args: &[&str]) -> Result<String> {
    let cli = parse(args);
    let config = CalcConfig::from_cli(&cli);
    let mut out = Vec::new();
    run(&cli.request(), &config, &mut out)?;
    Ok(String::from_utf8(out)?)
  }

  #[test]
  fn test_subcommands_and_aliases() {
    assert_eq!(parse(&["add", "1", "2"]).request().operation, Operation::Add);
    assert_eq!(parse(&["sub", "1", "2"]).request().operation, Operation::Subtract);
    assert_eq!(parse(&["subtract", "1", "2"]).request().operation, Operation::Subtract);
    assert_eq!(parse(&["mul", "1", "2"]).request().operation, Operation::Multiply);
    assert_eq!(parse(&["div", "1", "2"]).request().operation, Operation::Divide);
  }

  #[test]
  fn test_negative_operands() {
    let request = parse(&["add", "-1.5", "-2"]).request();
    assert_eq!(request, OperationRequest::new(Operation::Add, -1.5, -2.0));
  }

  #[test]
  fn test_text_output() -> Result<()> {
    assert_eq!(run_args(&["add", "2", "3"])?, "5\n");
    assert_eq!(run_args(&["div", "10", "2"])?, "5\n");
    assert_eq!(run_args(&["divide", "10", "4"])?, "2.5\n");
    assert_eq!(run_args(&["mul", "3", "3"])?, "9\n");
    Ok(())
  }

  #[test]
  fn test_json_output() -> Result<()> {
    let out = run_args(&["--format", "json", "sub", "10", "4"])?;
    assert_eq!(
      out,
      "{\"operation\":\"subtract\",\"a\":10.0,\"b\":4.0,\"result\":6.0,\"display\":\"6\"}\n"
    );
    Ok(())
  }

  #[test]
  fn test_division_by_zero_is_returned() {
    let err = run_args(&["div", "5", "0"]).unwrap_err();
    assert_eq!(err.downcast_ref::<CalcError>(), Some(&CalcError::DivisionByZero));
  }

  #[test]
  fn test_rejects_unparseable_numbers() {
    assert!(Cli::try_parse_from(["calc", "add", "two", "3"]).is_err());
    assert!(Cli::try_parse_from(["calc", "pow", "2", "3"]).is_err());
    assert!(Cli::try_parse_from(["calc", "add", "2"]).is_err());
  }
}
