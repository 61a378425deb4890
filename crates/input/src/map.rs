//! Key and mouse mapping from terminal events to simulation actions.

use crate::types::{CellLayout, LifeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    match key.code {
        // Run control
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(LifeAction::TogglePlay)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') => Some(LifeAction::Step),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),

        // History
        KeyCode::Char('[') | KeyCode::Char('b') | KeyCode::Char('B') => Some(LifeAction::StepBack),
        KeyCode::Char(']') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(LifeAction::StepForward)
        }
        KeyCode::Char('>') => Some(LifeAction::HistoryLonger),
        KeyCode::Char('<') => Some(LifeAction::HistoryShorter),

        // Speed
        KeyCode::Char('+') | KeyCode::Char('=') => Some(LifeAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(LifeAction::Slower),

        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(LifeAction::MoveCursor { dx: -1, dy: 0 })
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(LifeAction::MoveCursor { dx: 1, dy: 0 })
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(LifeAction::MoveCursor { dx: 0, dy: -1 })
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(LifeAction::MoveCursor { dx: 0, dy: 1 })
        }

        // Editing
        KeyCode::Enter => Some(LifeAction::FlipAtCursor),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(LifeAction::SelectAtCursor),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(LifeAction::DeselectAll),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a mouse press onto the grid: left flips, right selects.
///
/// Presses above or left of the grid origin map to `None`.
pub fn handle_mouse_event(event: MouseEvent, layout: &CellLayout) -> Option<LifeAction> {
    let button = match event.kind {
        MouseEventKind::Down(button) => button,
        _ => return None,
    };
    let (x, y) = layout.to_grid(event.column, event.row)?;
    match button {
        MouseButton::Left => Some(LifeAction::Flip { x, y }),
        MouseButton::Right => Some(LifeAction::Select { x, y }),
        MouseButton::Middle => None,
    }
}
