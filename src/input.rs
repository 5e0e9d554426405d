//! Input adapter: raw key codes in, `Direction` out.

use crossterm::event::KeyCode;

use crate::entities::Direction;

/// DOM `keyCode` values for the arrow keys.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Map a browser key code. Anything but the four arrows is unrecognized.
pub fn direction_from_key_code(code: u32) -> Direction {
    match code {
        KEY_LEFT => Direction::Left,
        KEY_UP => Direction::Up,
        KEY_RIGHT => Direction::Right,
        KEY_DOWN => Direction::Down,
        _ => Direction::Unrecognized,
    }
}

/// Map a terminal key: arrows, plus WASD in either case.
pub fn direction_from_key(code: &KeyCode) -> Direction {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        _ => Direction::Unrecognized,
    }
}
