//! Append-only move history.
//!
//! Records are always stored oldest-first, so the record for move `n` lives
//! at index `n`. Showing the list newest-first is a property of how it is
//! iterated ([`HistoryOrder`]), never of how it is stored.

use super::record::MoveRecord;
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Order in which history entries are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Chronological,
    /// Latest move first.
    NewestFirst,
}

impl HistoryOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chronological => "Oldest first",
            Self::NewestFirst => "Newest first",
        }
    }

    /// Toggles between `Chronological` and `NewestFirst`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Chronological => Self::NewestFirst,
            Self::NewestFirst => Self::Chronological,
        }
    }

    /// True when entries are listed newest-first.
    pub fn is_reversed(self) -> bool {
        self == Self::NewestFirst
    }
}

/// The sequence of move records of one game.
///
/// Never empty: the initial record is held apart from the moves that
/// follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) initial: MoveRecord,
    pub(crate) moves: Vec<MoveRecord>,
}

impl History {
    /// Creates a history holding only the initial record.
    pub fn new() -> Self {
        Self {
            initial: MoveRecord::initial(),
            moves: Vec::new(),
        }
    }

    /// Number of records, the initial one included.
    pub fn len(&self) -> usize {
        self.moves.len() + 1
    }

    /// Always false; kept for API symmetry with [`History::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the record for move `n`.
    pub fn get(&self, n: usize) -> Option<&MoveRecord> {
        match n {
            0 => Some(&self.initial),
            _ => self.moves.get(n - 1),
        }
    }

    /// Returns the most recent record.
    pub fn latest(&self) -> &MoveRecord {
        self.moves.last().unwrap_or(&self.initial)
    }

    /// Iterates records oldest-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> {
        std::iter::once(&self.initial).chain(self.moves.iter())
    }

    /// Collects records in the requested display order.
    pub fn ordered(&self, order: HistoryOrder) -> Vec<&MoveRecord> {
        match order {
            HistoryOrder::Chronological => self.iter().collect(),
            HistoryOrder::NewestFirst => self.iter().rev().collect(),
        }
    }

    /// Drops every record after move `step`.
    #[instrument(skip(self), fields(len = self.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        if step + 1 < self.len() {
            debug!(dropped = self.len() - step - 1, "Discarding future records");
        }
        self.moves.truncate(step);
    }

    /// Appends a record at the end.
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn history_of(positions: &[Position]) -> History {
        let mut history = History::new();
        let mut player = Player::X;
        for pos in positions {
            let next = history.latest().successor(*pos, player);
            history.push(next);
            player = player.opponent();
        }
        history
    }

    #[test]
    fn test_new_history_holds_initial_record() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.latest(), &MoveRecord::initial());
        assert_eq!(history.get(1), None);
    }

    #[test]
    fn test_index_equals_move_number() {
        let history = history_of(&[Position::Center, Position::TopLeft, Position::BottomRight]);
        for (index, record) in history.iter().enumerate() {
            assert_eq!(record.move_number(), index);
            assert_eq!(history.get(index), Some(record));
        }
    }

    #[test]
    fn test_truncate_after_keeps_prefix() {
        let mut history =
            history_of(&[Position::Center, Position::TopLeft, Position::BottomRight]);
        history.truncate_after(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().move_number(), 1);

        history.truncate_after(0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_ordered_newest_first_reverses_listing() {
        let history = history_of(&[Position::Center, Position::TopLeft]);
        let numbers: Vec<_> = history
            .ordered(HistoryOrder::NewestFirst)
            .iter()
            .map(|r| r.move_number())
            .collect();
        assert_eq!(numbers, vec![2, 1, 0]);
    }

    #[test]
    fn test_order_toggle_round_trips() {
        let order = HistoryOrder::default();
        assert!(!order.is_reversed());
        assert!(order.toggle().is_reversed());
        assert_eq!(order.toggle().toggle(), order);
    }
}
