//! Log output for the `attrmodel` binary.
//!
//! The library only emits `tracing` events. Installing a subscriber is left to the
//! binary, which calls [`init`] once at startup. `RUST_LOG` takes precedence over the
//! configured level.

use std::io::IsTerminal;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ModelError, Result};

/// Install a compact stderr subscriber at `level` (`error`, `warn`, `info`, `debug`,
/// `trace` or `off`).
pub fn init(level: &str) -> Result<()> {
    let default_level = parse_level(level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ModelError::Config(format!("Failed to initialize logging: {}", e)))
}

/// The level to log at: `debug` when verbose, otherwise the configured one.
pub fn effective_level(verbose: bool, configured: &str) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| ModelError::Config(format!("Invalid log level '{}'", level)))
}
