//! Path management for the contact book
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory, from `--data-dir` or the `CONTACT_BOOK_DATA_DIR`
//!    environment variable (both read by the command line parser)
//! 2. The platform config directory for `contact-book`
//!    (e.g. `~/.config/contact-book` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ContactError;

/// Environment variable the command line parser reads for `--data-dir`
pub const DATA_DIR_ENV: &str = "CONTACT_BOOK_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact book data
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Use the platform default location
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ContactError> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Create ContactPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Use `base_dir` when given, otherwise resolve as [`ContactPaths::new`]
    pub fn resolve(base_dir: Option<PathBuf>) -> Result<Self, ContactError> {
        match base_dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to an address book file inside the data directory
    pub fn book_file(&self, file_name: &str) -> PathBuf {
        self.data_dir().join(file_name)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ContactError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ContactError> {
    ProjectDirs::from("", "", "contact-book")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactError::Config("Could not determine home directory".into()))
}
