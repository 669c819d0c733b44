//! Logging init for the command-line tool.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to binaries.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter before `RUST_LOG`.
pub const LOG_ENV: &str = "URLEDIT_LOG";

/// Build the log filter: `URLEDIT_LOG`, then `RUST_LOG`, then a default
/// of `warn` (or `debug` for this crate when `verbose` is set).
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("warn,urledit=debug")
            } else {
                EnvFilter::new("warn")
            }
        })
}

/// Initialize structured logging to stderr, keeping stdout for results.
pub fn init_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {}", err))?;

    tracing::debug!("urledit logging initialized");
    Ok(())
}
