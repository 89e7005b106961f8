//! History consistency invariant: each record extends the one before it.

use super::Invariant;
use crate::{GameSession, Position, Square};

/// Invariant: history is a chain of single moves.
///
/// Record `k` carries move number `k` and `k` occupied squares. Each record
/// after the first keeps every mark of its predecessor and adds exactly one,
/// at the coordinate it reports as its last move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let records: Vec<_> = session.history().iter().collect();

        let numbered = records.iter().enumerate().all(|(k, record)| {
            record.move_number() == k && record.squares().occupied() == k
        });

        let chained = records.windows(2).all(|pair| {
            let (before, after) = (pair[0].squares(), pair[1].squares());
            let Some(pos) = pair[1].last_move().and_then(Position::from_coordinate) else {
                return false;
            };
            Position::ALL.iter().all(|p| {
                if *p == pos {
                    before.get(*p) == Square::Empty && after.get(*p) != Square::Empty
                } else {
                    before.get(*p) == after.get(*p)
                }
            })
        });

        numbered && records[0].last_move().is_none() && chained
    }

    fn description() -> &'static str {
        "Each history record extends the previous one by exactly one move"
    }
}
