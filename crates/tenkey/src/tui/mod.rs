//! Terminal front end for the calculator
//!
//! Everything here is presentation plumbing: the engine never learns it
//! is being rendered in a terminal.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorUI};
