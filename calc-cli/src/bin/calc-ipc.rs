//! Evaluate one JSON calculator request read from stdin.
//!
//! Input: `{"operation": "add", "a": 2, "b": 3}`.
//! Output: a single JSON response line on stdout. Failures are also
//! reported on stderr and exit with status 1.

use anyhow::Result;
use calc_cli::{config::log_level, logging};
use calc_core::ipc::handle_json_ipc;
use clap::Parser;
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(name = "calc-ipc", version, about = "Evaluate a JSON calculator request from stdin", long_about = None)]
struct IpcArgs {
  /// Log to stderr (-v for debug, -vv for trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() {
  if let Err(err) = try_main() {
    eprintln!("Error: {err:#}");
    std::process::exit(1);
  }
}

fn try_main() -> Result<()> {
  let args = IpcArgs::parse();
  logging::init(log_level(args.verbose))?;

  let evaluation = handle_json_ipc(io::stdin().lock(), io::stdout().lock())?;
  debug!(result = evaluation.result, "request handled");

  Ok(())
}
