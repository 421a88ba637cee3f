//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_rewind::Position;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.offset(-1, 0),
        KeyCode::Down => cursor.offset(1, 0),
        KeyCode::Left => cursor.offset(0, -1),
        KeyCode::Right => cursor.offset(0, 1),
        _ => cursor,
    }
}

/// Maps digit keys 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
