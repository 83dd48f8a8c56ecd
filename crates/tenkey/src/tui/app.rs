//! TUI application state
//!
//! Thin shell around the engine: it owns the current
//! [`CalculatorState`], remembers the last key for keypad highlighting,
//! and formats the display for rendering. All calculator behavior lives
//! in the engine; the app only routes presses through the dispatcher.

use crate::dispatch::{dispatch, Key};
use crate::display::DisplayFormatter;
use crate::engine::CalculatorState;

use super::input::KeyAction;

/// Calculator application state.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    state: CalculatorState,
    formatter: DisplayFormatter,
    last_key: Option<Key>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app at the initial calculator state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with a specific display formatter.
    #[must_use]
    pub fn with_formatter(formatter: DisplayFormatter) -> Self {
        Self {
            formatter,
            ..Self::default()
        }
    }

    /// Returns the current calculator state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the exact engine display text.
    #[must_use]
    pub fn display_raw(&self) -> &str {
        self.state.display()
    }

    /// Returns the grouped, presentation-formatted display text.
    #[must_use]
    pub fn display_formatted(&self) -> String {
        self.formatter.format(self.state.display())
    }

    /// Returns the last key pressed, for keypad highlighting.
    #[must_use]
    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    /// Returns the label the clear key should carry right now:
    /// `C` mid-entry, `AC` on a fresh display.
    #[must_use]
    pub fn clear_label(&self) -> &'static str {
        if self.state.display() == "0" {
            "AC"
        } else {
            "C"
        }
    }

    /// Returns the pending operator's symbol, if one is staged.
    #[must_use]
    pub fn pending_symbol(&self) -> Option<char> {
        self.state.pending().map(|op| op.symbol())
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Routes one keypad press through the dispatcher.
    pub fn press(&mut self, key: Key) {
        self.state = dispatch(std::mem::take(&mut self.state), key);
        self.last_key = Some(key);
    }

    /// Handles a terminal key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}
