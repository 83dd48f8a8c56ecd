//! Binary operator sum type
//!
//! The reference keypad dispatches operators through a string-keyed table;
//! here they are a tagged enum matched exhaustively, so an unhandled
//! operator is a compile error rather than a runtime lookup miss.

use serde::{Deserialize, Serialize};

/// The five keypad operators, including `=`.
///
/// `Equals` is an ordinary binary operator in this model: it discards the
/// left operand and surfaces the right one. That makes repeated `=`
/// presses with no new digit entry a no-op chain instead of re-applying
/// the last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Division (/)
    Divide,
    /// Multiplication (*)
    Multiply,
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Equals (=), yielding the right operand
    Equals,
}

impl Operator {
    /// Returns the keypad symbol for this operator.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Divide => '/',
            Self::Multiply => '*',
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Equals => '=',
        }
    }

    /// Looks an operator up by its keypad symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '/' => Some(Self::Divide),
            '*' => Some(Self::Multiply),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Applies the operator to a staged left operand and the current input.
    ///
    /// Total over all of `f64`: division by zero produces the platform
    /// infinity/NaN values, which the engine renders as-is.
    #[must_use]
    pub fn apply(self, accumulated: f64, input: f64) -> f64 {
        match self {
            Self::Divide => accumulated / input,
            Self::Multiply => accumulated * input,
            Self::Add => accumulated + input,
            Self::Subtract => accumulated - input,
            Self::Equals => input,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
