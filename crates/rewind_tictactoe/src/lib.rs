//! Rewind tic-tac-toe - pure game logic with move history and time-travel.
//!
//! This crate owns everything a front end needs to play tic-tac-toe with
//! a navigable history, and nothing that touches a terminal or a file.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] inspects a board and reports an [`Outcome`]
//! - **History**: an append-only, never-empty list of [`MoveRecord`]s
//! - **Session**: [`GameSession`] is an immutable value; intents are folded
//!   into it with [`reduce`]
//! - **View**: [`ViewSnapshot`] is the read-only projection a UI renders
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{reduce, GameSession, Intent, Position, ViewSnapshot};
//!
//! let session = GameSession::new();
//! let session = reduce(session, Intent::CellClicked(Position::Center)).into_session();
//! let view = ViewSnapshot::of(&session);
//! assert_eq!(view.status(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod invariants;
mod outcome;
mod position;
mod record;
mod rules;
mod session;
mod types;
mod view;

// Crate-level exports - Board and marks
pub use types::{Board, Player, Square};

// Crate-level exports - Positions and coordinates
pub use position::{Coordinate, Position};

// Crate-level exports - Outcome evaluation
pub use outcome::Outcome;
pub use rules::{WINNING_LINES, check_winner, evaluate, is_draw, is_full, winning_line};

// Crate-level exports - History
pub use history::{History, HistoryOrder};
pub use record::MoveRecord;

// Crate-level exports - Session and reducer
pub use action::{Effect, IgnoreReason, Intent, IntentParseError};
pub use session::{GameSession, Reduction, reduce};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants, StepInBoundsInvariant,
};

// Crate-level exports - View projection
pub use view::{HistoryEntry, ViewSnapshot};
