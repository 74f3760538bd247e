//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing the phones of a [`Record`](crate::models::Record).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No phone with the given value is on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// The replacement value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures a command handler can report.
///
/// Every variant is translated into a fixed user-facing message at the
/// dispatch boundary, see [`crate::commands::input_error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments or a value that failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required positional argument was not supplied
    #[error("Missing argument at position {0}")]
    MissingArgument(usize),

    /// The named contact is not in the address book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::InvalidInput(err.to_string())
    }
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => e.into(),
            RecordError::PhoneNotFound(phone) => {
                CommandError::InvalidInput(format!("unknown phone {}", phone))
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
