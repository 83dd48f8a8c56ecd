//! Calculator state record and its transitions
//!
//! `CalculatorState` is an immutable value: every keypad action consumes
//! the current state and returns a complete replacement. There is no
//! in-place mutation between transitions and no terminal state.

use serde::{Deserialize, Serialize};

use super::operator::Operator;

/// The whole calculator, as a flat value record.
///
/// Invariants held by every transition:
/// - `display` is a syntactically valid (possibly partial) decimal numeral
///   string, never empty;
/// - `display` contains at most one decimal point;
/// - `accumulated` is `None` exactly when no operator has been pressed
///   since the last full clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left-hand operand staged for the pending operation.
    accumulated: Option<f64>,
    /// Exact textual display content, trailing zeros and all.
    display: String,
    /// Operator waiting to be applied to the next operand.
    pending: Option<Operator>,
    /// When set, the next digit starts a fresh operand.
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::clear_all()
    }
}

impl CalculatorState {
    /// The initial state: empty accumulator, `"0"` on the display.
    #[must_use]
    pub fn clear_all() -> Self {
        Self {
            accumulated: None,
            display: "0".to_string(),
            pending: None,
            awaiting_operand: false,
        }
    }

    /// Returns the staged left-hand operand, if any.
    #[must_use]
    pub fn accumulated(&self) -> Option<f64> {
        self.accumulated
    }

    /// Returns the exact display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the operator waiting for its right operand, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Returns true when the next digit starts a new operand.
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Resets the display to `"0"`, keeping the accumulator and pending
    /// operator. This is the `C` keypress mid-entry; the dispatcher picks
    /// between this and [`clear_all`](Self::clear_all) based on whether
    /// the display is already `"0"`.
    #[must_use]
    pub fn clear_display(mut self) -> Self {
        self.display = "0".to_string();
        self
    }

    /// Removes the last display character; an emptied display falls back
    /// to `"0"`.
    #[must_use]
    pub fn clear_last_char(mut self) -> Self {
        self.display.pop();
        if self.display.is_empty() {
            self.display = "0".to_string();
        }
        self
    }

    /// Negates the numeric value of the display and re-renders it.
    ///
    /// Partial entries are reinterpreted numerically, so `"5."` becomes
    /// `"-5"`. That loses the partial-decimal formatting; the quirk comes
    /// from the reference keypad and is kept as-is.
    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        self.display = format_value(self.parsed_display() * -1.0);
        self
    }

    /// Divides the display value by 100.
    ///
    /// No-op when the display reads exactly zero. Otherwise the result is
    /// rendered with fixed fractional digits: however many the display
    /// already had, plus two (so `"50"` turns into `"0.50"`).
    #[must_use]
    pub fn input_percent(mut self) -> Self {
        let current = self.parsed_display();
        if current == 0.0 {
            return self;
        }

        let fraction_digits = match self.display.find('.') {
            Some(dot) => self.display.len() - dot - 1,
            None => 0,
        };
        let scaled = current / 100.0;
        self.display = if scaled.is_finite() {
            format!("{scaled:.prec$}", prec = fraction_digits + 2)
        } else {
            format_value(scaled)
        };
        self
    }

    /// Appends a decimal point, unless the display already has one.
    #[must_use]
    pub fn input_dot(mut self) -> Self {
        if !self.display.contains('.') {
            self.display.push('.');
            self.awaiting_operand = false;
        }
        self
    }

    /// Enters one digit.
    ///
    /// When a new operand is awaited the digit replaces the display;
    /// otherwise it appends, except that a display of exactly `"0"` is
    /// replaced rather than prefixed.
    ///
    /// # Panics
    ///
    /// Panics when `digit > 9` — that is a caller contract violation, not
    /// an input condition the engine coerces.
    #[must_use]
    pub fn input_digit(mut self, digit: u8) -> Self {
        assert!(digit <= 9, "digit out of range: {digit}");

        if self.awaiting_operand {
            self.display = digit.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(char::from(b'0' + digit));
        }
        self
    }

    /// Resolves the pending operation and stages the next one.
    ///
    /// The display is parsed as the right operand. With nothing staged yet
    /// it becomes the accumulator without computing anything; with a
    /// pending operator the operator is applied and the result lands on
    /// both the accumulator and the display. Either way the next operator
    /// is staged and the next digit starts a fresh operand.
    #[must_use]
    pub fn perform_operation(mut self, next: Operator) -> Self {
        let input_value = self.parsed_display();

        match (self.accumulated, self.pending) {
            (None, _) => self.accumulated = Some(input_value),
            (Some(accumulated), Some(pending)) => {
                let result = pending.apply(accumulated, input_value);
                self.accumulated = Some(result);
                self.display = format_value(result);
            }
            (Some(_), None) => {}
        }

        self.pending = Some(next);
        self.awaiting_operand = true;
        self
    }

    /// Parses the display as `f64`, treating unparseable partials (a bare
    /// `"-"`, say) as NaN the way `parseFloat` would.
    fn parsed_display(&self) -> f64 {
        self.display.parse().unwrap_or(f64::NAN)
    }
}

/// Renders a numeric result back into display text.
///
/// Finite values use the shortest round-trip form (`15`, not `15.0`).
/// Non-finite values are spelled `Infinity` / `-Infinity` / `NaN`, which
/// `f64::from_str` accepts back, so the display stays a parseable numeral
/// and every transition stays total.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Collapses the -0.0 produced by sign toggling on zero.
        "0".to_string()
    } else {
        format!("{value}")
    }
}
