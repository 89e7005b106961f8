//! Rewind - terminal tic-tac-toe with move history and time-travel.
//!
//! The game rules and session model live in [`rewind_tictactoe`]; this crate
//! adds the outer surfaces around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults ([`RewindConfig`])
//! - **Logging**: tracing to a file under the TUI, to stderr elsewhere
//! - **TUI**: ratatui front end that reads [`rewind_tictactoe::ViewSnapshot`]
//!   and forwards [`rewind_tictactoe::Intent`]s
//! - **Replay**: headless folding of intents, rendered as text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError, DEFAULT_CONFIG_FILE, RewindConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{Replay, render_json, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, TerminalError, run_tui};
