//! Typed board positions and their 1-indexed coordinates.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index. Indices past 8 have no position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-indexed `(column, row)` pair.
    pub fn from_coordinate(coordinate: Coordinate) -> Option<Self> {
        let Coordinate { column, row } = coordinate;
        if !(1..=3).contains(&column) || !(1..=3).contains(&row) {
            return None;
        }
        Self::from_index(usize::from(row - 1) * 3 + usize::from(column - 1))
    }

    /// Zero-based column (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Zero-based row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Returns the 1-indexed `(column, row)` coordinate of this position.
    pub fn coordinate(self) -> Coordinate {
        // Both values are at most 3, the narrowing cannot truncate.
        Coordinate {
            column: (self.column() + 1) as u8,
            row: (self.row() + 1) as u8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A 1-indexed `(column, row)` board coordinate, as shown in history labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({},{})", column, row)]
pub struct Coordinate {
    /// Column, 1 (left) through 3 (right).
    pub column: u8,
    /// Row, 1 (top) through 3 (bottom).
    pub row: u8,
}
