//! Two-operand command-line calculator: `calc <add|sub|mul|div> A B`.

use anyhow::Result;
use calc_cli::{logging, run, CalcConfig, Cli};
use clap::Parser;
use std::io;

fn main() {
  if let Err(err) = try_main() {
    eprintln!("Error: {err:#}");
    std::process::exit(1);
  }
}

fn try_main() -> Result<()> {
  let cli = Cli::parse();
  let config = CalcConfig::from_cli(&cli);
  logging::init(config.log_level)?;

  run(&cli.request(), &config, &mut io::stdout().lock())
}
