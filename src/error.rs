//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or querying the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A record field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the given name exists
    #[error("Contact name {0} is not found.")]
    NotFound(String),

    /// The record has no phone with the given value
    #[error("Phone number {0} is not found.")]
    PhoneNotFound(String),

    /// A record with the given name already exists
    #[error("Contact name {0} already exist.")]
    DuplicateName(String),
}

/// Errors that can occur while loading or saving the contacts file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted data could not be parsed
    #[error("Corrupted contacts file: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// The persisted data uses a format version this build does not know
    #[error("Unsupported contacts file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors reported at the command boundary, before the book is touched.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of positional arguments for a command
    #[error("invalid params. The correct is: {usage}")]
    ArgumentCount { usage: &'static str },

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact name Alice is not found.");

        let err = BookError::DuplicateName("Alice".to_string());
        assert_eq!(err.to_string(), "Contact name Alice already exist.");

        let err = BookError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number 0501234567 is not found.");

        let err = StorageError::UnsupportedVersion(9);
        assert_eq!(err.to_string(), "Unsupported contacts file version: 9");
    }

    #[test]
    fn test_argument_count_carries_usage() {
        let err = CommandError::ArgumentCount {
            usage: "add ContactName PhoneNumber",
        };
        assert_eq!(
            err.to_string(),
            "invalid params. The correct is: add ContactName PhoneNumber"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: BookError = ValidationError::InvalidPhone("123".to_string()).into();
        assert!(err.to_string().contains("phone must be 10 digits"));
    }
}
