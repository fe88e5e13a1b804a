//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Kind and state are ignored. Terminals disagree on whether an
    /// uppercase letter carries SHIFT, so character keys match either way.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(_) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers ^ KeyModifiers::SHIFT))
                .copied(),
            _ => None,
        }
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Cursor motion
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::MoveDown);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::MoveDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::MoveUp);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::MoveUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::Top);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::Top);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::Bottom);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::Bottom);

        // Selection
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleSelect);
        keys.bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::Mark);
        keys.bind(KeyCode::Char('M'), KeyModifiers::SHIFT, KeyAction::Unmark);
        keys.bind(KeyCode::Char('v'), KeyModifiers::NONE, KeyAction::InvertSelection);

        // Ordering
        keys.bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::Sort);
        keys.bind(KeyCode::Char('-'), KeyModifiers::NONE, KeyAction::MoveItemUp);
        keys.bind(KeyCode::Char('+'), KeyModifiers::NONE, KeyAction::MoveItemDown);

        // Display
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::ToggleNumbering);

        // Jump buffer
        for digit in 0..=9u8 {
            keys.bind(
                KeyCode::Char(char::from(b'0' + digit)),
                KeyModifiers::NONE,
                KeyAction::Digit(digit),
            );
        }

        // Application controls
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Confirm);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_bindings_map_vim_motion() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(press(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::MoveDown)
        );
        assert_eq!(
            bindings.get(press(KeyCode::Up, KeyModifiers::NONE)),
            Some(KeyAction::MoveUp)
        );
    }

    #[test]
    fn uppercase_matches_with_or_without_shift() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(press(KeyCode::Char('M'), KeyModifiers::SHIFT)),
            Some(KeyAction::Unmark)
        );
        assert_eq!(
            bindings.get(press(KeyCode::Char('M'), KeyModifiers::NONE)),
            Some(KeyAction::Unmark)
        );
    }

    #[test]
    fn lowercase_m_marks() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(press(KeyCode::Char('m'), KeyModifiers::NONE)),
            Some(KeyAction::Mark)
        );
    }

    #[test]
    fn digits_map_to_their_value() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(press(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(KeyAction::Digit(7))
        );
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_is_unbound() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(bindings.get(press(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn event_kind_is_ignored() {
        let bindings = KeyBindings::default();
        let mut repeat = press(KeyCode::Char('k'), KeyModifiers::NONE);
        repeat.kind = KeyEventKind::Repeat;
        repeat.state = KeyEventState::NUM_LOCK;

        assert_eq!(bindings.get(repeat), Some(KeyAction::MoveUp));
    }
}
