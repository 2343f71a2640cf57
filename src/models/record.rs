//! Contact record model
//!
//! A record is one contact: a name, an ordered list of distinct phone numbers
//! and an optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::errors::FieldError;
use super::name::Name;
use super::phone::Phone;

/// A single contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    /// Contact name, set once at creation
    name: Name,

    /// Phone numbers in insertion order, no duplicates
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// On-disk shape of a record, before phone uniqueness is checked
#[derive(Deserialize)]
struct StoredRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = FieldError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let mut record = Self {
            name: stored.name,
            phones: Vec::with_capacity(stored.phones.len()),
            birthday: stored.birthday,
        };
        for phone in &stored.phones {
            record.add_phone(phone.as_str())?;
        }
        Ok(record)
    }
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number
    ///
    /// Fails if the value is not a valid phone or the record already holds an
    /// identical one. The phone list is untouched on failure.
    pub fn add_phone(&mut self, value: &str) -> Result<(), FieldError> {
        let phone = Phone::new(value)?;

        if self.phones.iter().any(|p| p.as_str() == phone.as_str()) {
            return Err(FieldError::DuplicatePhone);
        }

        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone with a single new one
    ///
    /// The new value is validated first, so a rejected value leaves the
    /// existing phones in place.
    pub fn replace_phones(&mut self, value: &str) -> Result<(), FieldError> {
        let phone = Phone::new(value)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> Result<(), FieldError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Phones joined with ", " in insertion order
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
