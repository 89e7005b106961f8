//! Tracing subscriber setup.
//!
//! The terminal UI owns the screen, so it logs to a file. Everything else
//! logs to stderr, leaving stdout for command output.

use crate::config::RewindConfig;
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` wins over the configured filter.
fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Routes logs to the configured log file.
pub fn init_file_logging(config: &RewindConfig) -> std::io::Result<()> {
    let log_file = File::create(config.log_file())?;
    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init();

    info!(log_file = %config.log_file().display(), "File logging initialized");
    Ok(())
}

/// Routes logs to stderr.
pub fn init_stderr_logging(config: &RewindConfig) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
