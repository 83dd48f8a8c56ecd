//! Terminal keyboard mapping
//!
//! Translates crossterm key events into keypad [`Key`]s. Enter aliases
//! the `=` key; Esc is the clear key; Ctrl+C and Ctrl+Q quit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::dispatch::Key;

/// What a terminal key event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key.
    Press(Key),
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm events to [`KeyAction`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Key::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Backspace => KeyAction::Press(Key::Backspace),
            KeyCode::Enter => KeyAction::Press(Key::Op(crate::engine::Operator::Equals)),
            KeyCode::Esc => KeyAction::Press(Key::Clear),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character mapping tests =====

    #[test]
    fn test_digit_keys_press_digits() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Key::Digit(i as u8))
            );
        }
    }

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('+'))),
            KeyAction::Press(Key::Op(Operator::Add))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(Key::Op(Operator::Equals))
        );
    }

    #[test]
    fn test_function_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(Key::Dot)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Press(Key::Percent)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('~'))),
            KeyAction::Press(Key::ToggleSign)
        );
    }

    // ===== Alias tests =====

    #[test]
    fn test_enter_aliases_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Key::Op(Operator::Equals))
        );
    }

    #[test]
    fn test_backspace_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Press(Key::Backspace)
        );
    }

    #[test]
    fn test_escape_is_clear() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Press(Key::Clear)
        );
    }

    // ===== Quit and ignored input tests =====

    #[test]
    fn test_ctrl_c_and_ctrl_q_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_unmapped_chars_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('z'))),
            KeyAction::None
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::F(1))),
            KeyAction::None
        );
    }
}
