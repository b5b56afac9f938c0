//! Error types for the CLI

use desk_calculator::error::DeskError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Desk calculator library error
    #[error(transparent)]
    Desk(#[from] DeskError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization error
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Command line could not be parsed
    #[error("{message}")]
    Usage {
        /// Parser message without its `error:` prefix
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a usage error from a clap parse failure
    #[must_use]
    pub fn usage(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let rendered = rendered.trim_end();
        let message = rendered.strip_prefix("error: ").unwrap_or(rendered);
        Self::Usage {
            message: message.to_string(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
