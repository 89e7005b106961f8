//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use rewind_tictactoe::HistoryOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Tracing filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Board and history presentation.
    #[serde(default)]
    board: BoardConfig,
}

/// Board and history presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct BoardConfig {
    /// List history newest-first when a game starts.
    #[serde(default)]
    newest_first: bool,

    /// Show `(col,row)` hints on empty cells.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_log_filter() -> String {
    "info,rewind=debug,rewind_tictactoe=debug".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            board: BoardConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            newest_first: false,
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl BoardConfig {
    /// History order a new game starts with.
    pub fn initial_order(&self) -> HistoryOrder {
        if self.newest_first {
            HistoryOrder::NewestFirst
        } else {
            HistoryOrder::Chronological
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RewindConfig::default();
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
        assert!(!config.board().newest_first());
        assert!(*config.board().show_coordinates());
        assert_eq!(config.board().initial_order(), HistoryOrder::Chronological);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board]\nnewest_first = true").unwrap();

        let config = RewindConfig::from_file(file.path()).unwrap();
        assert_eq!(config.board().initial_order(), HistoryOrder::NewestFirst);
        assert!(*config.board().show_coordinates());
        assert_eq!(config.log_filter(), &default_log_filter());
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_filter = \"warn\"\nlog_file = \"/tmp/game.log\"\n\n[board]\nnewest_first = false\nshow_coordinates = false"
        )
        .unwrap();

        let config = RewindConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
        assert_eq!(config.board(), &BoardConfig::new(false, false));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RewindConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RewindConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board\nnewest_first = ").unwrap();

        let err = RewindConfig::load_or_default(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
