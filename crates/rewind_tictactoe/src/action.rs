//! First-class intents and their effects.
//!
//! Intents are what a view forwards when the user acts: they carry the
//! user's wish, not its consequence. The reducer turns each one into a new
//! session plus an [`Effect`] saying whether anything happened.

use super::position::Position;
use super::types::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user action forwarded by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Intent {
    /// A board cell was clicked.
    #[display("{}", _0.to_index())]
    CellClicked(Position),
    /// A history entry was clicked; carries the entry's move number.
    #[display("@{}", _0)]
    HistoryEntryClicked(usize),
    /// The history order toggle was clicked.
    #[display("r")]
    OrderToggleClicked,
}

/// Why an intent left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// No history record carries that move number.
    #[display("No move #{} in history", _0)]
    UnknownMove(usize),
}

/// What an intent did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// The session changed.
    Applied,
    /// The session is unchanged.
    Ignored(IgnoreReason),
}

impl Effect {
    /// True if the intent changed the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, Effect::Applied)
    }
}

/// Error parsing the textual form of an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum IntentParseError {
    /// Nothing to parse.
    #[display("Empty intent")]
    Empty,
    /// Cell index outside 0-8.
    #[display("Cell {} is off the board (expected 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),
    /// `@` not followed by a move number.
    #[display("Invalid move number in '{}'", _0)]
    BadMoveNumber(#[error(not(source))] String),
    /// Anything else.
    #[display("Unrecognized intent '{}' (expected 0-8, @<move>, or r)", _0)]
    Unrecognized(#[error(not(source))] String),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `0`-`8` (cell), `@<n>` (history entry), or `r` (order toggle).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IntentParseError::Empty);
        }

        if s.eq_ignore_ascii_case("r") {
            return Ok(Intent::OrderToggleClicked);
        }

        if let Some(number) = s.strip_prefix('@') {
            return number
                .parse::<usize>()
                .map(Intent::HistoryEntryClicked)
                .map_err(|_| IntentParseError::BadMoveNumber(s.to_string()));
        }

        match s.parse::<usize>() {
            Ok(index) => Position::from_index(index)
                .map(Intent::CellClicked)
                .ok_or(IntentParseError::CellOutOfRange(index)),
            Err(_) => Err(IntentParseError::Unrecognized(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!("4".parse(), Ok(Intent::CellClicked(Position::Center)));
        assert_eq!(" 0 ".parse(), Ok(Intent::CellClicked(Position::TopLeft)));
    }

    #[test]
    fn test_parse_jump_and_toggle() {
        assert_eq!("@3".parse(), Ok(Intent::HistoryEntryClicked(3)));
        assert_eq!("r".parse(), Ok(Intent::OrderToggleClicked));
        assert_eq!("R".parse(), Ok(Intent::OrderToggleClicked));
        assert!(matches!(
            "reverse".parse::<Intent>(),
            Err(IntentParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Intent>(), Err(IntentParseError::Empty));
        assert_eq!("9".parse::<Intent>(), Err(IntentParseError::CellOutOfRange(9)));
        assert_eq!(
            "@x".parse::<Intent>(),
            Err(IntentParseError::BadMoveNumber("@x".to_string()))
        );
        assert!(matches!(
            "jump".parse::<Intent>(),
            Err(IntentParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_display_matches_parse_form() {
        for intent in [
            Intent::CellClicked(Position::BottomRight),
            Intent::HistoryEntryClicked(2),
            Intent::OrderToggleClicked,
        ] {
            assert_eq!(intent.to_string().parse::<Intent>(), Ok(intent));
        }
    }

    #[test]
    fn test_ignore_reason_messages() {
        assert_eq!(
            IgnoreReason::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(IgnoreReason::GameOver(Player::X).to_string(), "Game is already won by X");
        assert_eq!(IgnoreReason::UnknownMove(7).to_string(), "No move #7 in history");
    }
}
