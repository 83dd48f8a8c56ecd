//! Unified keypad driver
//!
//! Write the interaction logic once, run it against every front end: a
//! driver presses keys and reads the display, nothing more. The headless
//! [`ScriptDriver`] exercises the engine directly; the TUI front end
//! provides a [`TuiDriver`] backed by the same trait, so the scenario
//! suites below hold for both.

use crate::dispatch::{Key, KeypadError};
use crate::engine::CalculatorState;

/// Abstract keypad interaction surface.
pub trait KeypadDriver {
    /// Presses a single key.
    fn press(&mut self, key: Key);

    /// Returns the exact engine display text.
    fn display(&self) -> String;

    /// Returns the presentation-formatted display text.
    fn formatted(&self) -> String;

    /// Resets to the initial state.
    fn reset(&mut self);

    /// Presses a sequence of keys given as script characters
    /// (see [`Key::from_char`]); spaces are ignored.
    fn press_script(&mut self, script: &str) -> Result<(), KeypadError> {
        for c in script.chars() {
            if c == ' ' {
                continue;
            }
            self.press(Key::from_char(c)?);
        }
        Ok(())
    }
}

/// Headless driver running the engine without any front end.
#[derive(Debug, Default)]
pub struct ScriptDriver {
    state: CalculatorState,
    formatter: crate::display::DisplayFormatter,
}

impl ScriptDriver {
    /// Creates a driver at the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}

impl KeypadDriver for ScriptDriver {
    fn press(&mut self, key: Key) {
        self.state = crate::dispatch::dispatch(std::mem::take(&mut self.state), key);
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn formatted(&self) -> String {
        self.formatter.format(self.state.display())
    }

    fn reset(&mut self) {
        self.state = CalculatorState::clear_all();
    }
}

/// TUI driver implementation.
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Key, KeypadDriver};
    use crate::tui::CalculatorApp;

    /// Driver backed by the TUI application state.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the underlying app.
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn display(&self) -> String {
            self.app.display_raw().to_string()
        }

        fn formatted(&self) -> String {
            self.app.display_formatted()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::new();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenario specifications =====
// These hold for ANY KeypadDriver implementation.

/// Digit entry never leaves a redundant leading zero.
pub fn verify_digit_entry<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_script("05").unwrap();
    assert_eq!(driver.display(), "5");

    driver.press_script("12").unwrap();
    assert_eq!(driver.display(), "512");
    driver.reset();
}

/// Pending operations resolve one at a time, left to right.
pub fn verify_pending_operations<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_script("12+3=").unwrap();
    assert_eq!(driver.display(), "15");
    driver.reset();

    // No precedence: the "+" resolves when "*" arrives.
    driver.press_script("2+3*4=").unwrap();
    assert_eq!(driver.display(), "20");
    driver.reset();
}

/// The `=` key re-stages the right operand; pressing it again moves nothing.
pub fn verify_repeated_equals<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_script("12+3=").unwrap();
    let settled = driver.display();
    driver.press_script("=").unwrap();
    assert_eq!(driver.display(), settled);
    driver.reset();
}

/// Division by zero surfaces the float infinity rendering.
pub fn verify_division_by_zero<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_script("5/0=").unwrap();
    assert_eq!(driver.display(), "Infinity");
    driver.reset();
}

/// Sign toggle and percent behave per the keypad face.
pub fn verify_sign_and_percent<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_script("7~").unwrap();
    assert_eq!(driver.display(), "-7");
    driver.press_script("~").unwrap();
    assert_eq!(driver.display(), "7");
    driver.reset();

    driver.press_script("50%").unwrap();
    assert_eq!(driver.display(), "0.50");
    driver.reset();
}

/// The clear key downgrades gracefully: display first, everything second.
pub fn verify_clear_keys<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_script("12+9").unwrap();
    driver.press(Key::Clear);
    assert_eq!(driver.display(), "0");

    // The pending operation survived the first clear.
    driver.press_script("3=").unwrap();
    assert_eq!(driver.display(), "15");

    driver.press(Key::Clear);
    driver.press(Key::Clear);
    driver.press_script("=").unwrap();
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// Complete scenario suite.
pub fn run_full_specification<D: KeypadDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_pending_operations(driver);
    verify_repeated_equals(driver);
    verify_division_by_zero(driver);
    verify_sign_and_percent(driver);
    verify_clear_keys(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ScriptDriver tests =====

    #[test]
    fn test_script_driver_new() {
        let driver = ScriptDriver::new();
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_script_driver_press() {
        let mut driver = ScriptDriver::new();
        driver.press(Key::Digit(4));
        driver.press(Key::Digit(2));
        assert_eq!(driver.display(), "42");
    }

    #[test]
    fn test_script_driver_skips_spaces() {
        let mut driver = ScriptDriver::new();
        driver.press_script("12 + 3 =").unwrap();
        assert_eq!(driver.display(), "15");
    }

    #[test]
    fn test_script_driver_rejects_unknown_keys() {
        let mut driver = ScriptDriver::new();
        let err = driver.press_script("12x").unwrap_err();
        assert_eq!(err, KeypadError::UnrecognizedKey('x'));
        // Keys before the bad one were applied.
        assert_eq!(driver.display(), "12");
    }

    #[test]
    fn test_script_driver_formatted_display() {
        let mut driver = ScriptDriver::new();
        driver.press_script("1000000*8=").unwrap();
        assert_eq!(driver.display(), "8000000");
        assert_eq!(driver.formatted(), "8,000,000");
    }

    #[test]
    fn test_script_driver_reset() {
        let mut driver = ScriptDriver::new();
        driver.press_script("12+").unwrap();
        driver.reset();
        assert_eq!(driver.state(), &CalculatorState::clear_all());
    }

    // ===== Unified specification tests =====

    #[test]
    fn test_unified_digit_entry() {
        verify_digit_entry(&mut ScriptDriver::new());
    }

    #[test]
    fn test_unified_pending_operations() {
        verify_pending_operations(&mut ScriptDriver::new());
    }

    #[test]
    fn test_unified_repeated_equals() {
        verify_repeated_equals(&mut ScriptDriver::new());
    }

    #[test]
    fn test_unified_division_by_zero() {
        verify_division_by_zero(&mut ScriptDriver::new());
    }

    #[test]
    fn test_unified_sign_and_percent() {
        verify_sign_and_percent(&mut ScriptDriver::new());
    }

    #[test]
    fn test_unified_clear_keys() {
        verify_clear_keys(&mut ScriptDriver::new());
    }

    #[test]
    fn test_full_specification() {
        run_full_specification(&mut ScriptDriver::new());
    }

    // ===== TuiDriver tests =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_press() {
            let mut driver = TuiDriver::new();
            driver.press_script("12+3=").unwrap();
            assert_eq!(driver.display(), "15");
        }

        #[test]
        fn test_tui_driver_formatted() {
            let mut driver = TuiDriver::new();
            driver.press_script("1234").unwrap();
            assert_eq!(driver.formatted(), "1,234");
        }

        #[test]
        fn test_tui_driver_app_access() {
            let mut driver = TuiDriver::new();
            driver.press(Key::Digit(9));
            assert_eq!(driver.app().display_raw(), "9");
        }

        #[test]
        fn test_full_specification_on_tui() {
            run_full_specification(&mut TuiDriver::new());
        }
    }
}
