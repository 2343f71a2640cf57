//! Core data models for the contact book
//!
//! This module contains the field validators (name, phone, birthday), the
//! contact record and the address book that holds them.

pub mod address_book;
pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;
pub mod record;

pub use address_book::AddressBook;
pub use birthday::Birthday;
pub use errors::FieldError;
pub use name::Name;
pub use phone::Phone;
pub use record::Record;
