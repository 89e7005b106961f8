//! Headless replay: fold a list of intents into a fresh session.

use derive_getters::Getters;
use rewind_tictactoe::{
    Effect, GameSession, HistoryOrder, IgnoreReason, Intent, ViewSnapshot, reduce,
};
use std::fmt::Write;
use tracing::{debug, info, instrument};

/// Outcome of a replay run.
#[derive(Debug, Clone, Getters)]
pub struct Replay {
    /// Session after the last intent.
    session: GameSession,
    /// Intents that left the session unchanged, with the reason.
    ignored: Vec<(Intent, IgnoreReason)>,
}

impl Replay {
    /// Projects the final session for rendering.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::of(&self.session)
    }
}

/// Folds `intents` into a new session listed in `order`.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn replay(intents: &[Intent], order: HistoryOrder) -> Replay {
    let mut ignored = Vec::new();
    let session = intents
        .iter()
        .fold(GameSession::with_order(order), |session, intent| {
            let (session, effect) = reduce(session, *intent).into_parts();
            if let Effect::Ignored(reason) = effect {
                debug!(%intent, %reason, "Replay intent ignored");
                ignored.push((*intent, reason));
            }
            session
        });

    info!(
        step = session.step_number(),
        len = session.history().len(),
        ignored = ignored.len(),
        "Replay finished"
    );
    Replay { session, ignored }
}

/// Renders a snapshot as plain text: board, status, then history.
pub fn render_text(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", snapshot.board().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", snapshot.status());
    if let Some(line) = snapshot.outcome().combination() {
        let cells: Vec<_> = line.iter().map(|pos| pos.label()).collect();
        let _ = writeln!(out, "Winning line: {}", cells.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "History ({}):", snapshot.order().label());
    for entry in snapshot.entries() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        let _ = writeln!(out, "{} {}", marker, entry.label());
    }
    out
}

/// Renders a snapshot as pretty-printed JSON.
pub fn render_json(snapshot: &ViewSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Position;

    fn intents(tokens: &[&str]) -> Vec<Intent> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_replay_collects_ignored_intents() {
        let run = replay(&intents(&["4", "4", "@9", "0"]), HistoryOrder::Chronological);
        assert_eq!(run.session().history().len(), 3);
        assert_eq!(
            run.ignored(),
            &vec![
                (
                    Intent::CellClicked(Position::Center),
                    IgnoreReason::SquareOccupied(Position::Center)
                ),
                (Intent::HistoryEntryClicked(9), IgnoreReason::UnknownMove(9)),
            ]
        );
    }

    #[test]
    fn test_render_text_marks_current_entry() {
        let run = replay(&intents(&["0", "4", "@1"]), HistoryOrder::NewestFirst);
        let text = render_text(&run.snapshot());
        assert_eq!(
            text,
            "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\
             \n\
             Next player: O\n\
             \n\
             History (Newest first):\n  \
             Go to move #2(Last move: (2,2))\n\
             > Go to move #1(Last move: (1,1))\n  \
             Go to game start\n"
        );
    }
}
