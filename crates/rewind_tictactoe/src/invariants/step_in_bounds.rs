//! Step bounds invariant: the viewed step always names a record.

use super::Invariant;
use crate::GameSession;

/// Invariant: `step_number < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step_number() < session.history().len()
    }

    fn description() -> &'static str {
        "Viewed step lies within history"
    }
}
