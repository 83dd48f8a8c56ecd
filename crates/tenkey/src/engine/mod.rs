//! Calculator engine: the state record and its transitions
//!
//! Pure state-transition functions over an immutable [`CalculatorState`].
//! One function per keypad action, each returning a complete replacement
//! state; no persistence, no concurrency, no suspension points.

pub mod operator;
pub mod state;

pub use operator::Operator;
pub use state::{format_value, CalculatorState};
