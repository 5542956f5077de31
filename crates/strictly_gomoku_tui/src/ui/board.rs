//! Board grid rendering.

use crate::input::Cursor;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_gomoku::{Player, Square, View};

/// Renders the board under the engine cursor with the keyboard cursor and
/// winning run highlighted.
pub fn render_board(f: &mut Frame, area: Rect, view: &View<'_>, cursor: Cursor, run_length: usize) {
    let size = view.board.size();
    let last = view.last_move.map(|mv| mv.cell_index());

    let mut lines = Vec::with_capacity(size + 1);
    lines.push(column_header(size));
    for row in 0..size {
        let mut spans = vec![Span::styled(format!("{:>2} ", row), Style::default().fg(Color::DarkGray))];
        for col in 0..size {
            let index = row * size + col;
            let square = view.board.get(index).unwrap_or(Square::Empty);
            let mut style = square_style(square);
            if view.win_result.is_winning_cell(index) {
                style = style.bg(Color::Yellow).fg(Color::Black);
            }
            if last == Some(index) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if (row, col) == cursor {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(square_symbol(square), style));
        }
        lines.push(Line::from(spans));
    }

    let title = format!(" {size}×{size} · {run_length} to win ");
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn column_header(size: usize) -> Line<'static> {
    let mut header = String::from("   ");
    for col in 0..size {
        header.push_str(&format!("{:^3}", col));
    }
    Line::from(Span::styled(header, Style::default().fg(Color::DarkGray)))
}

fn square_symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => " · ",
        Square::Occupied(Player::X) => " X ",
        Square::Occupied(Player::O) => " O ",
    }
}

fn square_style(square: Square) -> Style {
    match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
