//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Board cursor as (row, col).
pub type Cursor = (usize, usize);

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor((row, col): Cursor, size: usize, key: KeyCode) -> Cursor {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    }
}

/// Row-major cell index under the cursor.
pub fn cell_index((row, col): Cursor, size: usize) -> usize {
    row * size + col
}
