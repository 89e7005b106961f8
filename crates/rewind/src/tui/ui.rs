//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, ViewSnapshot};

use super::app::{App, Focus};

const HELP: &str = "arrows/1-9 move  enter place  tab history  o order  n new  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &snapshot);
    draw_history(frame, body[1], app, &snapshot);
    draw_status(frame, chunks[2], app, &snapshot);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, snapshot: &ViewSnapshot) {
    let border = if app.focus() == Focus::Board {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let title = if snapshot.outcome().is_over() {
        format!(" Move #{} - game over ", snapshot.step_number())
    } else {
        format!(" Move #{} ", snapshot.step_number())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 41, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, app, snapshot, row);
    }
    for area in [rows[1], rows[3]] {
        let sep = Paragraph::new("─".repeat(usize::from(area.width)))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, snapshot: &ViewSnapshot, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (column, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + column) {
            draw_cell(frame, cell_area, app, snapshot, pos);
        }
    }
    for sep_area in [cols[1], cols[3]] {
        let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, sep_area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, snapshot: &ViewSnapshot, pos: Position) {
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty if *app.board_config().show_coordinates() => (
            pos.coordinate().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.win_mask()[pos.to_index()] {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![
        Line::from(Span::styled(" ".repeat(13), style)),
        Line::from(Span::styled(format!("{:^13}", symbol), style)),
        Line::from(Span::styled(" ".repeat(13), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, snapshot: &ViewSnapshot) {
    let border = if app.focus() == Focus::History {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let items: Vec<ListItem> = snapshot
        .entries()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" History ({}) ", snapshot.order().label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, snapshot: &ViewSnapshot) {
    let (text, color) = match app.message() {
        Some(message) => (format!("{}  ({})", snapshot.status(), message), Color::Red),
        None => (snapshot.status().clone(), Color::Yellow),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
