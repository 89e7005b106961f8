//! Immutable history snapshots.

use super::position::{Coordinate, Position};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One entry of the game history: the board after a move, plus where that
/// move landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub(crate) squares: Board,
    pub(crate) last_move: Option<Coordinate>,
    pub(crate) move_number: usize,
}

impl MoveRecord {
    /// The record every history starts with: empty board, move 0.
    pub fn initial() -> Self {
        Self {
            squares: Board::new(),
            last_move: None,
            move_number: 0,
        }
    }

    /// Builds the record that follows this one when `player` takes `pos`.
    pub fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            squares: self.squares.with_mark(pos, player),
            last_move: Some(pos.coordinate()),
            move_number: self.move_number + 1,
        }
    }

    /// Board at this point in history.
    pub fn squares(&self) -> &Board {
        &self.squares
    }

    /// Coordinate of the move that produced this record; `None` for the
    /// initial record.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }

    /// 0 for the initial record, +1 per move after it.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Navigation label for this record.
    pub fn label(&self) -> String {
        match self.last_move {
            Some(coordinate) if self.move_number > 0 => {
                format!("Go to move #{}(Last move: {})", self.move_number, coordinate)
            }
            _ => "Go to game start".to_string(),
        }
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::initial()
    }
}
