//! Result of evaluating a board.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// What a board says about the game.
///
/// The phase of a session is never stored; it is recomputed from the board
/// being viewed whenever someone asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning line and at least one empty square.
    Ongoing,
    /// Every square is occupied and nobody completed a line.
    Draw,
    /// A player completed a line.
    Win {
        /// The player owning the line.
        winner: Player,
        /// The three cells of the line, in scan order.
        combination: [Position; 3],
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn combination(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { combination, .. } => Some(*combination),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once no further move can change the result.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Marks the cells of the winning line; all false without a winner.
    pub fn win_mask(&self) -> [bool; 9] {
        let mut mask = [false; 9];
        if let Some(combination) = self.combination() {
            for pos in combination {
                mask[pos.to_index()] = true;
            }
        }
        mask
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win { winner, .. } => write!(f, "Player {} wins", winner),
        }
    }
}
