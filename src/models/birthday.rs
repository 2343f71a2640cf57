//! Birthday field
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY` and stored as a
//! calendar date without a time component.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::errors::FieldError;

/// chrono format string matching `DD.MM.YYYY`
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    ///
    /// The day and month must be two digits and the year four digits; the
    /// result must be a real calendar date.
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        if !has_exact_shape(value) {
            return Err(FieldError::InvalidBirthday);
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::InvalidBirthday)
    }

    /// Get the underlying date
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

/// `DD.MM.YYYY`: digits everywhere except the two dot separators
fn has_exact_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}
