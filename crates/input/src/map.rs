//! Key mapping from terminal events to shell actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the card under the cursor (or start the highlighted level in the menu).
    Flip,
    Pause,
    Restart,
    /// Leave the running game for the level menu.
    Back,
    /// Pick a level preset, 1-based.
    ChooseLevel(u8),
}

/// Map keyboard input to shell actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyAction::CursorDown)
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyAction::Flip),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),
        KeyCode::Esc | KeyCode::Backspace => Some(KeyAction::Back),

        // Level shortcuts
        KeyCode::Char(c @ '1'..='6') => Some(KeyAction::ChooseLevel(c as u8 - b'0')),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
