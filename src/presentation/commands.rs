use crate::domain::entities::NavItem;
use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Keys handled by the application before the current screen sees them.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::JumpHome,
            KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
            true,
        );
        register(
            Action::JumpAudit,
            KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE),
            true,
        );
        register(
            Action::JumpHistory,
            KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE),
            true,
        );
        register(
            Action::JumpProfile,
            KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Returns the key that jumps to a navigation bar entry.
    pub fn nav_key(&self, item: NavItem) -> Option<KeyEvent> {
        self.get(Action::jump_to(item))
    }

    /// Returns the hint for quitting.
    pub fn quit_hint(&self) -> Option<Keybind> {
        self.get(Action::Quit)
            .map(|key| Keybind::new(key, Action::Quit, "Quit"))
    }
}

/// Screens listing the keys they respond to.
pub trait HasCommands {
    fn get_commands(&self) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_jump() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE)),
            Some(Action::JumpHistory)
        );
        assert_eq!(
            registry.nav_key(NavItem::Profile),
            Some(KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE))
        );
    }

    #[test]
    fn test_quit_keys() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.get(Action::Quit),
            Some(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }
}
