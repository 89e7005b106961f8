//! Terminal error types.

use derive_more::{Display, Error};

/// Terminal I/O error with location tracking.
#[derive(Debug, Display, Error)]
#[display("Terminal error: {} at {}:{}", source, file, line)]
pub struct TerminalError {
    /// Underlying I/O failure.
    pub source: std::io::Error,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl From<std::io::Error> for TerminalError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            source,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
