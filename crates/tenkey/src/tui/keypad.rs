//! Keypad widget
//!
//! A 4x5 button grid mirroring the physical keypad face: function row on
//! top, digit block below, operator column on the right, equals in the
//! bottom corner. Buttons highlight while their key is the most recent
//! press, and mouse clicks hit-test back to keys.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::dispatch::Key;
use crate::engine::Operator;

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol on the button face.
    pub label: char,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The keypad key this button presses.
    pub key: Key,
}

impl KeypadButton {
    fn new(label: char, key: Key) -> Self {
        Self {
            label,
            pressed: false,
            key,
        }
    }
}

/// The keypad layout, row-major:
/// ```text
/// [ C ] [ ± ] [ % ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new('C', Key::Clear),
            KeypadButton::new('\u{b1}', Key::ToggleSign),
            KeypadButton::new('%', Key::Percent),
            KeypadButton::new('/', Key::Op(Operator::Divide)),
            KeypadButton::new('7', Key::Digit(7)),
            KeypadButton::new('8', Key::Digit(8)),
            KeypadButton::new('9', Key::Digit(9)),
            KeypadButton::new('*', Key::Op(Operator::Multiply)),
            KeypadButton::new('4', Key::Digit(4)),
            KeypadButton::new('5', Key::Digit(5)),
            KeypadButton::new('6', Key::Digit(6)),
            KeypadButton::new('-', Key::Op(Operator::Subtract)),
            KeypadButton::new('1', Key::Digit(1)),
            KeypadButton::new('2', Key::Digit(2)),
            KeypadButton::new('3', Key::Digit(3)),
            KeypadButton::new('+', Key::Op(Operator::Add)),
            KeypadButton::new('0', Key::Digit(0)),
            KeypadButton::new('.', Key::Dot),
            KeypadButton::new('\u{232b}', Key::Backspace),
            KeypadButton::new('=', Key::Op(Operator::Equals)),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button carrying a key.
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button for a key, releasing every other button.
    pub fn highlight_key(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button_by_key(key) {
            self.buttons[idx].pressed = true;
        }
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside `area` to the key it lands on.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border occupies the outermost cell on each side.
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|btn| btn.key)
    }
}

/// Renders a [`Keypad`] with a dynamic clear-key label.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    clear_label: &'a str,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a keypad widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            clear_label: "AC",
        }
    }

    /// Sets the clear key's label (`C` mid-entry, `AC` otherwise).
    #[must_use]
    pub fn clear_label(mut self, label: &'a str) -> Self {
        self.clear_label = label;
        self
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.key {
            Key::Digit(_) | Key::Dot => Style::default().fg(Color::White),
            Key::Op(Operator::Equals) => Style::default().fg(Color::Green),
            Key::Op(_) => Style::default().fg(Color::Yellow),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Percent | Key::ToggleSign | Key::Backspace => {
                Style::default().fg(Color::Cyan)
            }
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return;
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);
            let style = Self::button_style(btn);

            if btn_width >= 3 {
                let label = if btn.key == Key::Clear {
                    format!("[{}]", self.clear_label)
                } else {
                    format!("[{}]", btn.label)
                };
                let label_x = x + (btn_width.saturating_sub(label.chars().count() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
