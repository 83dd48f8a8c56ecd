//! Key-to-transition dispatch
//!
//! Maps keypad input to engine transitions. This is the whole contract
//! between a front end and the engine: front ends translate whatever
//! event type they have into a [`Key`], and [`dispatch`] picks the
//! transition — including the `C`-versus-`AC` decision, which depends on
//! whether anything is on the display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{CalculatorState, Operator};

/// Input the dispatcher does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// A character with no keypad mapping.
    #[error("unrecognized key: {0:?}")]
    UnrecognizedKey(char),
}

/// One keypad press, independent of the event system that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit key, `0`–`9`.
    Digit(u8),
    /// The decimal point key.
    Dot,
    /// An operator key, `=` included.
    Op(Operator),
    /// The percent key.
    Percent,
    /// The sign-toggle key (`±`).
    ToggleSign,
    /// The backspace key.
    Backspace,
    /// The clear key (`C` mid-entry, `AC` on a fresh display).
    Clear,
}

impl Key {
    /// Maps a character to its keypad key.
    ///
    /// Digits, `.`, the operator symbols, and `%` map per the keypad
    /// face; `~` (or `±` itself) is the sign toggle, `<` is backspace,
    /// and `c` is the clear key. Anything else is a
    /// [`KeypadError::UnrecognizedKey`].
    pub fn from_char(c: char) -> Result<Self, KeypadError> {
        if let Some(digit) = c.to_digit(10) {
            return Ok(Self::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Ok(Self::Op(op));
        }
        match c {
            '.' => Ok(Self::Dot),
            '%' => Ok(Self::Percent),
            '~' | '\u{b1}' => Ok(Self::ToggleSign),
            '<' => Ok(Self::Backspace),
            'c' | 'C' => Ok(Self::Clear),
            other => Err(KeypadError::UnrecognizedKey(other)),
        }
    }
}

impl TryFrom<char> for Key {
    type Error = KeypadError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

/// Applies one key press to the state.
///
/// The clear key reads the display before deciding: mid-entry it only
/// clears the display (`C`); on a display already reading `"0"` it resets
/// everything (`AC`).
#[must_use]
pub fn dispatch(state: CalculatorState, key: Key) -> CalculatorState {
    match key {
        Key::Digit(digit) => state.input_digit(digit),
        Key::Dot => state.input_dot(),
        Key::Op(op) => state.perform_operation(op),
        Key::Percent => state.input_percent(),
        Key::ToggleSign => state.toggle_sign(),
        Key::Backspace => state.clear_last_char(),
        Key::Clear => {
            if state.display() == "0" {
                CalculatorState::clear_all()
            } else {
                state.clear_display()
            }
        }
    }
}
