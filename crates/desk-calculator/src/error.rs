//! Error types for the desk calculator
//!
//! The engine itself never fails: division by zero folds to `0` and every
//! keypad action is accepted. Errors only come from the text boundaries
//! (key names, operator symbols, config files).

use thiserror::Error;

/// Result type for desk calculator boundary operations
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors raised while turning outside input into calculator actions
#[derive(Debug, Error)]
pub enum DeskError {
    /// A digit outside `0..=9`
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    /// An operator symbol with no matching [`Operator`](crate::core::Operator)
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// A key with no keypad binding
    #[error("Unknown key {key:?} at position {position}")]
    UnknownKey {
        /// The key that failed to map
        key: String,
        /// Char offset in the key sequence
        position: usize,
    },

    /// A name (panel, toggle) that matches nothing
    #[error("Unknown {kind}: {name:?}")]
    UnknownName {
        /// What was being looked up
        kind: &'static str,
        /// The name given
        name: String,
    },

    /// Configuration could not be parsed or serialised
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
