//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_tictactoe::{Effect, GameSession, Intent, Position, ViewSnapshot, reduce};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use crate::config::BoardConfig;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through history entries.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    board_config: BoardConfig,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(board_config: BoardConfig) -> Self {
        Self {
            session: GameSession::with_order(board_config.initial_order()),
            board_config,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Presentation settings.
    pub fn board_config(&self) -> &BoardConfig {
        &self.board_config
    }

    /// Cell under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry, as an index into the displayed entries.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last intent was ignored, if it was.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Projects the session for drawing.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::of(&self.session)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('o') => self.dispatch(Intent::OrderToggleClicked),
            KeyCode::Char('n') => self.restart(),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }

        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Intent::CellClicked(self.cursor)),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(Intent::CellClicked(pos));
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let entries = self.session.history().len();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(entries - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.snapshot().entries().get(self.selected) {
                    self.dispatch(Intent::HistoryEntryClicked(*entry.move_number()));
                }
            }
            _ => {}
        }
    }

    /// Folds an intent into the session.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        let session = std::mem::take(&mut self.session);
        let (session, effect) = reduce(session, intent).into_parts();
        self.session = session;

        self.message = match effect {
            Effect::Applied => None,
            Effect::Ignored(reason) => Some(reason.to_string()),
        };
        debug!(?effect, step = self.session.step_number(), "Intent dispatched");
        self.sync_selection();
    }

    /// Starts a new game, keeping the current history order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.session = GameSession::with_order(self.session.order());
        self.message = None;
        self.sync_selection();
    }

    /// Points the history highlight at the viewed entry.
    fn sync_selection(&mut self) {
        if let Some(index) = self.snapshot().current_entry_index() {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{HistoryOrder, Outcome, Player};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(BoardConfig::default())
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().step_number(), 2);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(
            app.session().current().squares().get(Position::Center).player(),
            Some(Player::O)
        );
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session().current().squares().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_ignored_move_sets_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Square Center is already occupied"));

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = app();
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().step_number(), 1);
        assert!(!app.session().x_is_next());
    }

    #[test]
    fn test_order_toggle_follows_viewed_entry() {
        let mut app = app();
        for c in ['1', '5'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.session().order(), HistoryOrder::NewestFirst);
        assert_eq!(app.selected(), 0);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().step_number(), 1);
    }

    #[test]
    fn test_restart_keeps_order() {
        let mut app = App::new(BoardConfig::new(true, true));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session().history().len(), 1);
        assert!(app.session().is_reversed());
        assert_eq!(app.session().outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(&mut app(), KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app(), KeyCode::Esc), AppAction::Quit);
        assert_eq!(
            app().handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
        assert_eq!(press(&mut app(), KeyCode::Left), AppAction::Continue);
    }
}
