//! Read-only projection of a session for front ends.

use super::history::HistoryOrder;
use super::outcome::Outcome;
use super::session::GameSession;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One navigable history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct HistoryEntry {
    /// Text shown on the entry.
    label: String,
    /// Move number the entry jumps to.
    move_number: usize,
    /// True for the entry currently on the board.
    is_current: bool,
}

/// Everything a view needs to draw a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ViewSnapshot {
    /// Board of the viewed record.
    board: Board,
    /// Cells of the winning line; all false without a winner.
    win_mask: [bool; 9],
    /// One-line status: winner, draw, or whose turn it is.
    status: String,
    /// History entries in display order.
    entries: Vec<HistoryEntry>,
    /// Outcome of the viewed board.
    outcome: Outcome,
    /// Move number being viewed.
    step_number: usize,
    /// Order the entries are listed in.
    order: HistoryOrder,
}

impl ViewSnapshot {
    /// Projects a session.
    #[instrument(skip(session), fields(step = session.step_number()))]
    pub fn of(session: &GameSession) -> Self {
        let current = session.current();
        let outcome = session.outcome();

        let entries = session
            .ordered_history()
            .into_iter()
            .map(|record| HistoryEntry {
                label: record.label(),
                move_number: record.move_number(),
                is_current: record.move_number() == session.step_number(),
            })
            .collect();

        Self {
            board: *current.squares(),
            win_mask: outcome.win_mask(),
            status: status_text(&outcome, session.next_player()),
            entries,
            outcome,
            step_number: session.step_number(),
            order: session.order(),
        }
    }

    /// Position of the current entry within [`ViewSnapshot::entries`].
    pub fn current_entry_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_current)
    }
}

/// Status line for an outcome with `next` to move.
pub fn status_text(outcome: &Outcome, next: Player) -> String {
    match outcome {
        Outcome::Win { winner, .. } => format!("Winner: {}", winner),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Ongoing => format!("Next player: {}", next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fresh_session_view() {
        let view = ViewSnapshot::of(&GameSession::new());
        assert_eq!(view.status(), "Next player: X");
        assert_eq!(view.win_mask(), &[false; 9]);
        assert_eq!(view.entries().len(), 1);
        assert_eq!(view.entries()[0].label(), "Go to game start");
        assert!(*view.entries()[0].is_current());
    }

    #[test]
    fn test_entries_follow_display_order() {
        let session = GameSession::new()
            .apply_move(Position::TopLeft)
            .into_session()
            .apply_move(Position::BottomRight)
            .into_session()
            .change_order()
            .into_session();
        let view = ViewSnapshot::of(&session);

        let labels: Vec<_> = view.entries().iter().map(|e| e.label().as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to move #2(Last move: (3,3))",
                "Go to move #1(Last move: (1,1))",
                "Go to game start",
            ]
        );
        assert_eq!(view.current_entry_index(), Some(0));
    }

    #[test]
    fn test_status_texts() {
        assert_eq!(status_text(&Outcome::Draw, Player::X), "It's a draw!");
        assert_eq!(status_text(&Outcome::Ongoing, Player::O), "Next player: O");
        let win = Outcome::Win {
            winner: Player::O,
            combination: [Position::TopLeft, Position::Center, Position::BottomRight],
        };
        assert_eq!(status_text(&win, Player::X), "Winner: O");
    }
}
