//! User settings for the contact book
//!
//! Manages user preferences: which view renders output and which file in the
//! data directory holds the address book.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::ContactPaths;
use crate::error::ContactError;

/// Output renderer preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// One line per contact (default)
    #[default]
    Console,
    /// Contacts rendered as a table
    Table,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// User settings for the contact book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Renderer used for command output
    #[serde(default)]
    pub view: ViewKind,

    /// Address book file name, relative to the data directory
    #[serde(default = "default_book_file")]
    pub book_file: String,
}

/// The only settings layout this build understands
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_book_file() -> String {
    "addressbook.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            view: ViewKind::default(),
            book_file: default_book_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ContactError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that serde alone can't
    ///
    /// `book_file` must be a bare file name so the book stays inside the data
    /// directory.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ContactError::Config(format!(
                "Unsupported settings schema version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        let name = self.book_file.trim();
        if name.is_empty() {
            return Err(ContactError::Config("book_file cannot be empty".into()));
        }
        if name == "." || name == ".." || name.contains(|c: char| c == '/' || c == '\\') {
            return Err(ContactError::Config(format!(
                "book_file must be a plain file name, got '{}'",
                self.book_file
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContactError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
