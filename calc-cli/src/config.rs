use crate::cli::Cli;
use clap::ValueEnum;
use tracing::Level;

/// How a successful result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// The formatted number on its own line
  #[default]
  Text,
  /// One JSON object per line
  Json,
}

/// Configuration for a calculator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
  /// Output format for successful results
  pub format: OutputFormat,
  /// Most verbose level the subscriber lets through
  pub log_level: Level,
}

impl CalcConfig {
  /// Derive the run configuration from parsed arguments
  #[must_use]
  pub const fn from_cli(cli: &Cli) -> Self {
    Self {
      format: cli.format,
      log_level: log_level(cli.verbose),
    }
  }
}

impl Default for CalcConfig {
  fn default() -> Self {
    Self {
      format: OutputFormat::Text,
      log_level: Level::WARN,
    }
  }
}

/// Map a `-v` count to a maximum log level
#[must_use]
pub const fn log_level(verbose: u8) -> Level {
  match verbose {
    0 => Level::WARN,
    1 => Level::DEBUG,
    _ => Level::TRACE,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["calc", "add", "1", "2"]).unwrap();
    assert_eq!(CalcConfig::from_cli(&cli), CalcConfig::default());
  }

  #[test]
  fn test_verbosity_levels() {
    assert_eq!(log_level(0), Level::WARN);
    assert_eq!(log_level(1), Level::DEBUG);
    assert_eq!(log_level(2), Level::TRACE);
    assert_eq!(log_level(9), Level::TRACE);
  }

  #[test]
  fn test_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["calc", "mul", "3", "3", "--format", "json", "-v"]).unwrap();
    let config = CalcConfig::from_cli(&cli);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, Level::DEBUG);
  }
}
