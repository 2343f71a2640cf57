//! Contact display formatting
//!
//! Formats records for terminal output as plain lines or a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Record;

/// Shown instead of a list when there are no contacts
pub const EMPTY_BOOK: &str = "Address book is empty.";

/// Phones for display, or "No phone"
fn phones_or_placeholder(record: &Record) -> String {
    if record.phones().is_empty() {
        "No phone".to_string()
    } else {
        record.phone_list()
    }
}

/// Birthday for display, or "No birthday"
fn birthday_or_placeholder(record: &Record) -> String {
    record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "No birthday".to_string())
}

/// Format one contact as `name: phones, Birthday: date`
pub fn format_contact_line(record: &Record) -> String {
    format!(
        "{}: {}, Birthday: {}",
        record.name(),
        phones_or_placeholder(record),
        birthday_or_placeholder(record)
    )
}

/// Format contacts one per line
pub fn format_contact_list(records: &[Record]) -> String {
    if records.is_empty() {
        return EMPTY_BOOK.to_string();
    }

    records
        .iter()
        .map(format_contact_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phones")]
    phones: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
}

/// Format contacts as a table
pub fn format_contact_table(records: &[Record]) -> String {
    if records.is_empty() {
        return EMPTY_BOOK.to_string();
    }

    let rows = records.iter().map(|r| ContactRow {
        name: r.name().to_string(),
        phones: phones_or_placeholder(r),
        birthday: birthday_or_placeholder(r),
    });

    Table::new(rows).with(Style::psql()).to_string()
}
