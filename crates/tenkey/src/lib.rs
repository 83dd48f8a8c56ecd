//! tenkey - a one-operator-at-a-time keypad calculator
//!
//! The core is a pure state machine: keystrokes (digit entry, decimal
//! point, sign toggle, percent, operator, clear, backspace) transform an
//! immutable [`CalculatorState`] record, and pending binary operations
//! resolve one at a time with no precedence and no expression tree.
//! Everything around it - display grouping, key mapping, the terminal
//! front end - is presentation plumbing that calls the transitions and
//! renders the result.
//!
//! # Example
//!
//! ```rust
//! use tenkey::prelude::*;
//!
//! let mut driver = ScriptDriver::new();
//! driver.press_script("12+3=").unwrap();
//! assert_eq!(driver.display(), "15");
//!
//! driver.reset();
//! driver.press_script("50%").unwrap();
//! assert_eq!(driver.display(), "0.50");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod dispatch;
pub mod display;
pub mod driver;
pub mod engine;

#[cfg(feature = "tui")]
pub mod tui;

pub use dispatch::{dispatch, Key, KeypadError};
pub use display::DisplayFormatter;
pub use engine::{CalculatorState, Operator};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::dispatch::{dispatch, Key, KeypadError};
    pub use crate::display::DisplayFormatter;
    pub use crate::driver::{KeypadDriver, ScriptDriver};
    pub use crate::engine::{format_value, CalculatorState, Operator};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
