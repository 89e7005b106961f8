//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use rewind_tictactoe::Intent;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = rewind::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Fold intents into a new game and print the result
    Replay {
        /// Intents in order: 0-8 places a mark, @N jumps to move N, r toggles history order
        #[arg(required = true)]
        intents: Vec<Intent>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,
    },
}

/// Output format for `replay`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplayFormat {
    /// Board, status and history as plain text
    Text,
    /// The full view snapshot as JSON
    Json,
}
