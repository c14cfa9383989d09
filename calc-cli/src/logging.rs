use anyhow::{anyhow, Result};
use tracing::Level;

/// Install the global subscriber. Logs go to stderr so stdout only ever
/// carries results.
pub fn init(level: Level) -> Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init()
    .map_err(|err| anyhow!("Failed to initialize logging: {err}"))
}
