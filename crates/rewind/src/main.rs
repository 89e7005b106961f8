//! Rewind - tic-tac-toe with move history and time-travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ReplayFormat};
use rewind::{RewindConfig, init_file_logging, init_stderr_logging, render_json, render_text};
use rewind_tictactoe::Intent;
use tracing::{info, instrument, warn};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { intents, format } => run_replay(&config, &intents, format),
    }
}

/// Run the interactive terminal UI
fn run_play(config: &RewindConfig) -> Result<()> {
    init_file_logging(config)
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    rewind::run_tui(config)?;
    Ok(())
}

/// Replay intents and print the final view
#[instrument(skip(config, intents), fields(count = intents.len()))]
fn run_replay(config: &RewindConfig, intents: &[Intent], format: ReplayFormat) -> Result<()> {
    init_stderr_logging(config);
    info!("Replaying intents");

    let run = rewind::replay(intents, config.board().initial_order());
    for (intent, reason) in run.ignored() {
        warn!(%intent, %reason, "Intent had no effect");
    }

    let snapshot = run.snapshot();
    let output = match format {
        ReplayFormat::Text => render_text(&snapshot),
        ReplayFormat::Json => render_json(&snapshot).context("Failed to serialize snapshot")?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
