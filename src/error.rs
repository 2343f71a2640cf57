//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror.
//! Validation and usage errors carry the exact text shown to the user, since the
//! command layer renders every error as `Error: <message>`.

use thiserror::Error;

use crate::models::FieldError;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// A field value or record mutation was rejected
    #[error("{0}")]
    Validation(String),

    /// A command was invoked with the wrong arguments
    #[error("{0}")]
    Usage(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ContactError {
    /// Create a usage error for a command
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a "duplicate" error for contacts
    pub fn duplicate_contact(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FieldError> for ContactError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
