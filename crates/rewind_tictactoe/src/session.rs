//! Game session state and the reducer that drives it.
//!
//! A [`GameSession`] is an owned value. Every operation consumes the
//! session and hands back a [`Reduction`]: the next session plus the
//! [`Effect`] of the intent. Nothing is mutated behind the caller's back
//! and nothing returns an error; intents that cannot apply come back as
//! [`Effect::Ignored`] with the session exactly as it was.

use super::action::{Effect, IgnoreReason, Intent};
use super::history::{History, HistoryOrder};
use super::outcome::Outcome;
use super::position::Position;
use super::record::MoveRecord;
use super::rules::evaluate;
use super::types::Player;
use serde::Serialize;
use tracing::{debug, instrument};

/// State of one game with a navigable history.
///
/// Invariants (see [`crate::SessionInvariants`]):
/// - `step_number < history.len()`
/// - `x_is_next == (step_number % 2 == 0)`
/// - `history.get(k).move_number() == k`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) history: History,
    pub(crate) step_number: usize,
    pub(crate) x_is_next: bool,
    pub(crate) order: HistoryOrder,
}

/// Result of folding one intent into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    session: GameSession,
    effect: Effect,
}

impl Reduction {
    fn applied(session: GameSession) -> Self {
        Self {
            session,
            effect: Effect::Applied,
        }
    }

    fn ignored(session: GameSession, reason: IgnoreReason) -> Self {
        debug!(%reason, "Intent ignored");
        Self {
            session,
            effect: Effect::Ignored(reason),
        }
    }

    /// The session after the intent.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// What the intent did.
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Takes the session, discarding the effect.
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Splits into session and effect.
    pub fn into_parts(self) -> (GameSession, Effect) {
        (self.session, self.effect)
    }
}

/// Folds an intent into a session.
///
/// This is the single entry point a view needs: cell clicks, history
/// clicks and order toggles all go through here.
#[instrument(skip(session), fields(step = session.step_number, len = session.history.len()))]
pub fn reduce(session: GameSession, intent: Intent) -> Reduction {
    match intent {
        Intent::CellClicked(pos) => session.apply_move(pos),
        Intent::HistoryEntryClicked(move_number) => session.jump_to(move_number),
        Intent::OrderToggleClicked => session.change_order(),
    }
}

impl GameSession {
    /// Creates a session at game start: X to move, history listed oldest-first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::Chronological)
    }

    /// Creates a session at game start with the given history order.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
            order,
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Ignored when the viewed board already has a winner or the square is
    /// taken. Otherwise every record after the viewed one is discarded, the
    /// new record is appended, and the view moves to it.
    #[instrument(skip(self), fields(position = ?pos, step = self.step_number))]
    pub fn apply_move(mut self, pos: Position) -> Reduction {
        let current = self.current();

        if let Some(winner) = evaluate(current.squares()).winner() {
            return Reduction::ignored(self, IgnoreReason::GameOver(winner));
        }

        if !current.squares().is_empty(pos) {
            return Reduction::ignored(self, IgnoreReason::SquareOccupied(pos));
        }

        let next = current.successor(pos, self.next_player());

        self.history.truncate_after(self.step_number);
        self.step_number = self.history.len();
        self.history.push(next);
        self.x_is_next = !self.x_is_next;

        debug!(
            move_number = self.step_number,
            len = self.history.len(),
            "Move applied"
        );
        self.verified()
    }

    /// Moves the view to the record with `move_number`.
    ///
    /// The turn flag follows the parity of the move number. Numbers with no
    /// record are ignored.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(mut self, move_number: usize) -> Reduction {
        if move_number >= self.history.len() {
            return Reduction::ignored(self, IgnoreReason::UnknownMove(move_number));
        }

        self.step_number = move_number;
        self.x_is_next = move_number % 2 == 0;

        debug!(to = move_number, "Jumped");
        self.verified()
    }

    /// Flips the order history entries are listed in.
    ///
    /// Storage is untouched, so the viewed move and the turn flag stay the
    /// same across the toggle.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn change_order(mut self) -> Reduction {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "History order changed");
        self.verified()
    }

    /// Returns the full history, oldest-first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index (and move number) of the record being viewed.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True if X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns the player placing the next mark.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Order history entries are listed in.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// True if history is listed newest-first.
    pub fn is_reversed(&self) -> bool {
        self.order.is_reversed()
    }

    /// The record being viewed.
    pub fn current(&self) -> &MoveRecord {
        self.history
            .get(self.step_number)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Evaluates the board being viewed.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current().squares())
    }

    /// History records in display order.
    pub fn ordered_history(&self) -> Vec<&MoveRecord> {
        self.history.ordered(self.order)
    }

    fn verified(self) -> Reduction {
        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(&self);
        Reduction::applied(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
