//! Field validation errors

use std::fmt;

/// Errors raised while constructing or mutating contact fields
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Phone is not exactly ten decimal digits
    InvalidPhone,
    /// Birthday is not a real date written as `DD.MM.YYYY`
    InvalidBirthday,
    /// The record already holds this phone number
    DuplicatePhone,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone => write!(f, "Phone number must be a 10-digit number."),
            Self::InvalidBirthday => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::DuplicatePhone => write!(f, "Phone number already exists."),
        }
    }
}

impl std::error::Error for FieldError {}
