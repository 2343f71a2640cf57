//! Contact Book - interactive command-line contact manager
//!
//! This library provides the core of a small address book: contacts with
//! phone numbers and birthdays, persisted between sessions as JSON and driven
//! by an interactive prompt.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Field validators, contact records and the address book
//! - `storage`: JSON file storage for the address book
//! - `cli`: Command parsing, handlers and the interactive session
//! - `display`: Output formatting and views
//!
//! # Example
//!
//! ```rust
//! use contact_book::cli::{dispatch, Reply};
//! use contact_book::models::AddressBook;
//!
//! let mut book = AddressBook::new();
//! let reply = dispatch("add John 1234567890", &mut book);
//! assert_eq!(
//!     reply,
//!     Reply::Message("Contact added. Phone number: 1234567890".to_string())
//! );
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ContactError, ContactResult};
