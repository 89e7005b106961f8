//! Terminal UI for Rewind.

mod app;
mod error;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use error::TerminalError;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::config::RewindConfig;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: &RewindConfig) -> Result<(), TerminalError> {
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let mut terminal = match enter_screen() {
        Ok(terminal) => terminal,
        Err(err) => {
            let steps = [
                disable_raw_mode(),
                execute!(io::stdout(), LeaveAlternateScreen),
            ];
            log_restore_failures(steps);
            return Err(err);
        }
    };

    let mut app = App::new(*config.board());
    let res = run_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = %err, "Game loop error");
    }
    info!(
        moves = app.session().history().len() - 1,
        "Leaving Rewind TUI"
    );
    res.and(restored)
}

fn enter_screen() -> Result<Term, TerminalError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Attempts every restore step, returning the first failure.
fn restore_terminal(terminal: &mut Term) -> Result<(), TerminalError> {
    let steps = [
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ];
    match log_restore_failures(steps) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Logs each failed restore step and returns the first failure.
fn log_restore_failures<const N: usize>(steps: [io::Result<()>; N]) -> Option<io::Error> {
    let mut first = None;
    for step in steps {
        if let Err(err) = step {
            warn!(error = %err, "Terminal restore step failed");
            if first.is_none() {
                first = Some(err);
            }
        }
    }
    first
}

fn run_loop(terminal: &mut Term, app: &mut App) -> Result<(), TerminalError> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
