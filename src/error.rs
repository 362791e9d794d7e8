//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that a command handler can produce.
///
/// None of these are fatal: the dispatch loop converts each one into a
/// fixed user-facing message with [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number or date failed validation
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValidationError),

    /// Too many arguments for a command with a fixed arity
    #[error("Unexpected arguments: {0}")]
    UnexpectedArguments(String),

    /// Too few arguments for the command
    #[error("Missing arguments")]
    MissingArguments,

    /// Contact (or one of its phones) not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CommandError {
    /// The message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) | Self::UnexpectedArguments(_) => "Incorrect value.",
            Self::MissingArguments => "Give me name and phone please.",
            Self::NotFound(_) => "Name not found.",
        }
    }
}

/// Errors that can occur while reading or writing the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
