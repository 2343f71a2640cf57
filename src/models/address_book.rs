//! Address book container
//!
//! Holds every record for the session in insertion order. Names act as the
//! unique key, compared case-insensitively.

use serde::{Deserialize, Serialize};

use super::birthday::Birthday;
use super::name::Name;
use super::record::Record;
use crate::error::{ContactError, ContactResult};

/// The ordered collection of all contacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBook")]
pub struct AddressBook {
    #[serde(default)]
    records: Vec<Record>,
}

/// On-disk shape of the book, before name uniqueness is checked
#[derive(Deserialize)]
struct StoredBook {
    #[serde(default)]
    records: Vec<Record>,
}

impl TryFrom<StoredBook> for AddressBook {
    type Error = ContactError;

    fn try_from(stored: StoredBook) -> Result<Self, Self::Error> {
        let mut book = Self::new();
        for record in stored.records {
            book.add_record(record)?;
        }
        Ok(book)
    }
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    ///
    /// Rejects a record whose name already exists (case-insensitive).
    pub fn add_record(&mut self, record: Record) -> ContactResult<()> {
        if self.find(record.name().as_str()).is_some() {
            return Err(ContactError::duplicate_contact(record.name().as_str()));
        }

        self.records.push(record);
        Ok(())
    }

    /// Find the first record whose name matches (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().matches(name))
    }

    /// Find the first record whose name matches, for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().matches(name))
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Name and birthday of every record that has one, in insertion order
    pub fn birthdays(&self) -> impl Iterator<Item = (&Name, &Birthday)> {
        self.records
            .iter()
            .filter_map(|r| r.birthday().map(|b| (r.name(), b)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
