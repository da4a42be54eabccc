//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to the control it drives.
pub fn control_for_code(code: KeyCode) -> Option<Control> {
    match code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Control::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Control::Rotate),

        // Menu / overlay
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(Control::Confirm)
        }
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(Control::Cancel),

        _ => None,
    }
}

/// Map keyboard input to a control. Chords with Ctrl or Alt are ignored.
pub fn control_for_key(key: KeyEvent) -> Option<Control> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    control_for_code(key.code)
}

/// Check if key should quit the program regardless of mode.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
