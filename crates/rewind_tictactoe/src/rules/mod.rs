//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from history and session storage so any board, current or
//! historical, can be judged the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Evaluates a board.
///
/// Win-check precedes full-check, so a full board that also holds a line is
/// reported as a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, combination)) = winning_line(board) {
        return Outcome::Win {
            winner,
            combination,
        };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
