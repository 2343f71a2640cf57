//! Phone number field
//!
//! A phone number is exactly ten decimal digits, with no formatting characters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::errors::FieldError;

/// Number of digits a phone number must have
pub const PHONE_DIGITS: usize = 10;

/// A validated phone number
///
/// # Example
///
/// ```
/// use contact_book::models::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidPhone` unless `value` is exactly ten ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(FieldError::InvalidPhone);
        }

        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
