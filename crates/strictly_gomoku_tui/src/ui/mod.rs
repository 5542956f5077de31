//! Stateless UI rendering.

mod board;

use crate::app::{App, Screen, SetupField, SetupForm, Table};
use crate::config::{RUN_LENGTH_CHOICES, SIZE_CHOICES};
use crate::history_panel::{entries, status_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const TITLE: &str = "Strictly Gomoku";

/// Draws the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Setup(form) => {
            draw_setup(frame, chunks[1], form);
            draw_status(frame, chunks[2], app.status_message().unwrap_or("Choose parameters of game"), false);
            draw_help(frame, chunks[3], "↑/↓ field · ←/→ change · Enter start · q quit");
        }
        Screen::Playing(table) => {
            let view = table.engine.current_view();
            let (text, highlighted) = match app.status_message() {
                Some(message) => (message.to_string(), false),
                None => (status_line(&view), view.win_result.status.is_over()),
            };
            draw_game(frame, chunks[1], table);
            draw_status(frame, chunks[2], &text, highlighted);
            draw_help(
                frame,
                chunks[3],
                "arrows move · Enter mark · u/r back/forward · Home/End · s sort · n new · q quit",
            );
        }
    }
}

fn draw_setup(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let field = |label: &str, value: usize, range: (usize, usize), focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{label:<20}")),
            Span::styled(format!("< {value:>2} >"), style),
            Span::styled(format!("  ({}-{})", range.0, range.1), Style::default().fg(Color::DarkGray)),
        ])
    };

    let lines = vec![
        field(
            "Size of board:",
            form.size,
            (*SIZE_CHOICES.start(), *SIZE_CHOICES.end()),
            form.field == SetupField::Size,
        ),
        Line::from(""),
        field(
            "Cells need to win:",
            form.run_length,
            (*RUN_LENGTH_CHOICES.start(), *RUN_LENGTH_CHOICES.end()),
            form.field == SetupField::RunLength,
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Choose parameters of game "),
    );
    frame.render_widget(paragraph, center_rect(area, 48, 7));
}

fn draw_game(frame: &mut Frame, area: Rect, table: &Table) {
    let rule = table.engine.rule();
    let board_width = (rule.size() * 3 + 5) as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(28)])
        .split(area);

    let view = table.engine.current_view();
    board::render_board(frame, cols[0], &view, table.cursor, rule.run_length());

    let list_entries = entries(&table.engine, table.order);
    let selected = list_entries.iter().position(|entry| entry.current);
    let items: Vec<ListItem> = list_entries
        .into_iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label, style)))
        })
        .collect();
    let title = format!(" Moves (s: {}) ", table.order.toggle_label());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    // Selecting the current step keeps it scrolled into view.
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, cols[1], &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, text: &str, highlighted: bool) {
    let style = if highlighted {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
