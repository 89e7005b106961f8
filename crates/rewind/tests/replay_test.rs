//! Tests for headless replay and its renderings.

use rewind::{RewindConfig, render_json, render_text, replay};
use rewind_tictactoe::{HistoryOrder, Intent, Outcome, Player};
use std::io::Write;

fn intents(tokens: &[&str]) -> Vec<Intent> {
    tokens
        .iter()
        .map(|t| t.parse().expect("valid intent"))
        .collect()
}

#[test]
fn test_replay_top_row_win_as_text() {
    let run = replay(&intents(&["0", "4", "1", "5", "2"]), HistoryOrder::Chronological);
    assert_eq!(run.session().outcome().winner(), Some(Player::X));

    let text = render_text(&run.snapshot());
    assert!(text.starts_with("X|X|X\n-+-+-\n4|O|O\n-+-+-\n7|8|9\n"));
    assert!(text.contains("Winner: X\n"));
    assert!(text.contains("Winning line: Top-left, Top-center, Top-right\n"));
    assert!(text.contains("> Go to move #5(Last move: (3,1))\n"));
}

#[test]
fn test_replay_moves_after_win_are_reported() {
    let run = replay(
        &intents(&["0", "4", "1", "5", "2", "8"]),
        HistoryOrder::Chronological,
    );
    assert_eq!(run.ignored().len(), 1);
    assert_eq!(run.session().history().len(), 6);
}

#[test]
fn test_replay_json_snapshot() {
    let run = replay(&intents(&["0", "4", "1", "5", "2"]), HistoryOrder::NewestFirst);
    let json = render_json(&run.snapshot()).expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["status"], "Winner: X");
    assert_eq!(
        value["win_mask"],
        serde_json::json!([true, true, true, false, false, false, false, false, false])
    );
    assert_eq!(value["order"], "NewestFirst");
    assert_eq!(value["entries"][0]["move_number"], 5);
    assert_eq!(value["entries"][5]["label"], "Go to game start");
    assert_eq!(value["outcome"]["Win"]["winner"], "X");
}

#[test]
fn test_time_travel_replay() {
    let run = replay(&intents(&["0", "4", "8", "@1", "2"]), HistoryOrder::Chronological);
    let session = run.session();
    assert!(run.ignored().is_empty());
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.step_number(), 2);
    assert_eq!(session.outcome(), Outcome::Ongoing);
}

#[test]
fn test_config_sets_initial_order() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[board]\nnewest_first = true").expect("write config");

    let config = RewindConfig::load_or_default(file.path()).expect("valid config");
    let run = replay(&intents(&["4"]), config.board().initial_order());
    assert!(run.session().is_reversed());

    let text = render_text(&run.snapshot());
    assert!(text.contains(
        "History (Newest first):\n> Go to move #1(Last move: (2,2))\n  Go to game start\n"
    ));
}
