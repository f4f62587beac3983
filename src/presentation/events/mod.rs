//! Key classification shared by screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Terminal event helpers.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key quits regardless of focus.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a back event.
    #[must_use]
    pub fn is_back_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key moves the selection up.
    #[must_use]
    pub fn is_up_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Up | KeyCode::BackTab | KeyCode::Left)
    }

    /// Checks if key moves the selection down.
    #[must_use]
    pub fn is_down_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Down | KeyCode::Tab | KeyCode::Right)
    }

    /// Checks if key is `c` with Control held.
    #[must_use]
    pub fn is_ctrl_char(key: &KeyEvent, c: char) -> bool {
        key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Checks if key is a plain character (no Control or Alt).
    #[must_use]
    pub fn plain_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}
