//! Storage layer for the contact book
//!
//! Persists the address book as a single pretty-printed JSON file. Loading
//! never fails: a missing file is a fresh start, and an unreadable or corrupt
//! one is logged and replaced by an empty book.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ContactResult;
use crate::models::AddressBook;

/// Load/save pair for the address book file
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a storage bound to an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the book is written to before it replaces the real one
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".saving");
        self.path.with_file_name(name)
    }

    /// Load the address book, or an empty one if it can't be used
    pub fn load(&self) -> AddressBook {
        match self.read_book() {
            Ok(Some(book)) => {
                info!(path = %self.path.display(), contacts = book.len(), "loaded address book");
                book
            }
            Ok(None) => {
                info!(path = %self.path.display(), "no saved address book, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unusable address book, starting empty");
                AddressBook::new()
            }
        }
    }

    /// `Ok(None)` when the file does not exist
    fn read_book(&self) -> ContactResult<Option<AddressBook>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Save the address book
    ///
    /// The book is fully written and synced to a staging file that is then
    /// renamed over the old one, so an interrupted save keeps the previous
    /// contents.
    pub fn save(&self, book: &AddressBook) -> ContactResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(book)?;
        let staging = self.staging_path();

        let written = File::create(&staging).and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        info!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
