//! Core calculator types: operators, digits and binary evaluation
//!
//! The desk calculator is a four-function machine with no precedence. Each
//! operator press combines the pending left operand with the entry buffer,
//! left to right.

pub mod engine;
pub mod number;

pub use engine::{reduce, Action, CalculatorState};
pub use number::{format_number, parse_numeral};

use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary operator on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the symbol shown on the keypad and in the expression trace
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Short name used for element IDs and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Looks up an operator from its display symbol or a keyboard alias
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "−" | "-" => Some(Self::Subtract),
            "×" | "*" | "x" | "X" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        evaluate(a, b, self)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| DeskError::UnknownOperator(s.to_string()))
    }
}

/// A single decimal digit, `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, `None` when `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The digit as a character
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DeskError;

    fn try_from(value: u8) -> DeskResult<Self> {
        Self::new(value).ok_or_else(|| DeskError::InvalidDigit(value.to_string()))
    }
}

impl TryFrom<char> for Digit {
    type Error = DeskError;

    fn try_from(ch: char) -> DeskResult<Self> {
        ch.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(|| DeskError::InvalidDigit(ch.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Combines two operands
///
/// Division by zero yields `0` rather than an error or infinity. Everything
/// else is plain `f64` arithmetic.
#[must_use]
pub fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        }
    }
}

/// Combines two operands given a textual operator
///
/// An unrecognised symbol returns the right operand unchanged.
#[must_use]
pub fn evaluate_symbol(a: f64, b: f64, symbol: &str) -> f64 {
    Operator::from_symbol(symbol).map_or(b, |op| evaluate(a, b, op))
}
