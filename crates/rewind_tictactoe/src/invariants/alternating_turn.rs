//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: players alternate.
///
/// The cached turn flag matches the parity of the viewed step, and every
/// record holds `ceil(n / 2)` X marks and `floor(n / 2)` O marks for its
/// move number `n`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let flag_matches = session.x_is_next() == (session.step_number() % 2 == 0);

        let marks_alternate = session.history().iter().all(|record| {
            let n = record.move_number();
            let board = record.squares();
            board.count(Player::X) == n.div_ceil(2) && board.count(Player::O) == n / 2
        });

        flag_matches && marks_alternate
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
