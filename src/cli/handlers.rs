//! Command handlers
//!
//! One function per user command. Each takes the positional arguments and the
//! address book and returns the text to display. Validation and usage problems
//! come back as `Err`; a missing contact is an ordinary `Ok` message.

use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Goodbye!";
pub const NO_BIRTHDAYS: &str = "No birthdays found.";

fn not_found(name: &str) -> String {
    format!("Contact {} not found.", name)
}

/// `add [name] [phone]`: create the contact if needed, then add the phone
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> ContactResult<String> {
    let [name, phone, ..] = args else {
        return Err(ContactError::usage("Invalid command. Use 'add [name] [phone]'."));
    };

    let (mut message, record) = match book.find_mut(name) {
        Some(record) => {
            if !phone.is_empty() {
                record.add_phone(phone)?;
            }
            ("Contact updated.".to_string(), None)
        }
        None => {
            let mut record = Record::new(*name);
            if !phone.is_empty() {
                record.add_phone(phone)?;
            }
            ("Contact added.".to_string(), Some(record))
        }
    };

    if let Some(record) = record {
        book.add_record(record)?;
    }

    if !phone.is_empty() {
        message.push_str(&format!(" Phone number: {}", phone));
    }
    Ok(message)
}

/// `change [name] [new_phone]`: replace every phone with the new one
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> ContactResult<String> {
    let [name, new_phone] = args else {
        return Err(ContactError::usage(
            "Invalid command. Please use 'change [name] [new_phone]'.",
        ));
    };

    match book.find_mut(name) {
        Some(record) => {
            record.replace_phones(new_phone)?;
            Ok(format!("Phone number changed for {}.", name))
        }
        None => Ok(not_found(name)),
    }
}

/// `phone [name]`: list a contact's phones
pub fn show_phone(args: &[&str], book: &AddressBook) -> ContactResult<String> {
    let [name] = args else {
        return Err(ContactError::usage("Invalid command. Use 'phone [name]'."));
    };

    Ok(match book.find(name) {
        Some(record) if !record.phones().is_empty() => {
            format!("{}'s phone number is: {}", name, record.phone_list())
        }
        Some(_) => format!("{} doesn't have a phone number set.", name),
        None => not_found(name),
    })
}

/// `all`: every record, in insertion order
pub fn show_all_contacts(book: &AddressBook) -> &[Record] {
    book.records()
}

/// `add-birthday [name] [date]`: set or overwrite a birthday
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> ContactResult<String> {
    let [name, date] = args else {
        return Err(ContactError::usage(
            "Invalid command. Use 'add-birthday [name] [date]'.",
        ));
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            Ok(format!("Birthday added for {}.", name))
        }
        None => Ok(not_found(name)),
    }
}

/// `show-birthday [name]`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> ContactResult<String> {
    let [name] = args else {
        return Err(ContactError::usage(
            "Invalid command. Use 'show-birthday [name]'.",
        ));
    };

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("{}'s birthday is: {}", name, birthday),
            None => format!("{} doesn't have a birthday set.", name),
        },
        None => not_found(name),
    })
}

/// `birthdays`: `name: date` for every contact with a birthday
pub fn birthdays(book: &AddressBook) -> String {
    let lines: Vec<String> = book
        .birthdays()
        .map(|(name, birthday)| format!("{}: {}", name, birthday))
        .collect();

    if lines.is_empty() {
        NO_BIRTHDAYS.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_john() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();
        book
    }

    #[test]
    fn test_add_new_then_update() {
        let mut book = AddressBook::new();

        let added = add_contact(&["John", "1234567890"], &mut book).unwrap();
        assert_eq!(added, "Contact added. Phone number: 1234567890");

        let updated = add_contact(&["John", "0987654321"], &mut book).unwrap();
        assert_eq!(updated, "Contact updated. Phone number: 0987654321");

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_ignores_extra_args() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890", "extra", "words"], &mut book).unwrap();
        assert_eq!(book.find("John").unwrap().phone_list(), "1234567890");
    }

    #[test]
    fn test_add_merges_case_insensitively() {
        let mut book = book_with_john();
        let reply = add_contact(&["JOHN", "0987654321"], &mut book).unwrap();
        assert!(reply.starts_with("Contact updated."));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_usage_error() {
        let mut book = AddressBook::new();
        let err = add_contact(&["John"], &mut book).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "Invalid command. Use 'add [name] [phone]'.");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&["John", "123"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Phone number must be a 10-digit number.");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_duplicate_phone() {
        let mut book = book_with_john();
        let err = add_contact(&["John", "1234567890"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Phone number already exists.");
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_change_replaces_all_phones() {
        let mut book = book_with_john();
        add_contact(&["John", "0987654321"], &mut book).unwrap();

        let reply = change_contact(&["John", "5555555555"], &mut book).unwrap();
        assert_eq!(reply, "Phone number changed for John.");
        assert_eq!(book.find("John").unwrap().phone_list(), "5555555555");
    }

    #[test]
    fn test_change_invalid_phone_keeps_original() {
        let mut book = book_with_john();
        let err = change_contact(&["John", "bad"], &mut book).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(book.find("John").unwrap().phone_list(), "1234567890");
    }

    #[test]
    fn test_change_not_found_and_usage() {
        let mut book = AddressBook::new();
        assert_eq!(
            change_contact(&["Ghost", "5555555555"], &mut book).unwrap(),
            "Contact Ghost not found."
        );
        assert!(change_contact(&["Ghost"], &mut book).unwrap_err().is_usage());
        assert!(change_contact(&["a", "b", "c"], &mut book)
            .unwrap_err()
            .is_usage());
    }

    #[test]
    fn test_show_phone() {
        let mut book = book_with_john();
        add_contact(&["John", "0987654321"], &mut book).unwrap();
        assert_eq!(
            show_phone(&["john"], &book).unwrap(),
            "john's phone number is: 1234567890, 0987654321"
        );
    }

    #[test]
    fn test_show_phone_variants() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Jane")).unwrap();

        assert_eq!(
            show_phone(&["Jane"], &book).unwrap(),
            "Jane doesn't have a phone number set."
        );
        assert_eq!(
            show_phone(&["Ghost"], &book).unwrap(),
            "Contact Ghost not found."
        );
        assert!(show_phone(&[], &book).unwrap_err().is_usage());
    }

    #[test]
    fn test_show_all_contacts() {
        let mut book = book_with_john();
        add_contact(&["Jane", "1112223333"], &mut book).unwrap();

        let names: Vec<_> = show_all_contacts(&book)
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert!(show_all_contacts(&AddressBook::new()).is_empty());
    }

    #[test]
    fn test_birthday_round_trip() {
        let mut book = book_with_john();

        assert_eq!(
            add_birthday(&["John", "01.02.1990"], &mut book).unwrap(),
            "Birthday added for John."
        );
        assert_eq!(
            show_birthday(&["John"], &book).unwrap(),
            "John's birthday is: 01.02.1990"
        );
    }

    #[test]
    fn test_add_birthday_errors() {
        let mut book = book_with_john();

        let err = add_birthday(&["John", "1990-02-01"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
        assert!(book.find("John").unwrap().birthday().is_none());

        assert_eq!(
            add_birthday(&["Ghost", "01.02.1990"], &mut book).unwrap(),
            "Contact Ghost not found."
        );
        assert!(add_birthday(&["John"], &mut book).unwrap_err().is_usage());
    }

    #[test]
    fn test_show_birthday_variants() {
        let book = book_with_john();
        assert_eq!(
            show_birthday(&["John"], &book).unwrap(),
            "John doesn't have a birthday set."
        );
        assert_eq!(
            show_birthday(&["Ghost"], &book).unwrap(),
            "Contact Ghost not found."
        );
        assert!(show_birthday(&["a", "b"], &book).unwrap_err().is_usage());
    }

    #[test]
    fn test_birthdays_listing() {
        let mut book = AddressBook::new();
        assert_eq!(birthdays(&book), NO_BIRTHDAYS);

        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_contact(&["Jane", "1112223333"], &mut book).unwrap();
        add_contact(&["Jim", "4445556666"], &mut book).unwrap();
        assert_eq!(birthdays(&book), NO_BIRTHDAYS);

        add_birthday(&["Jim", "03.03.1993"], &mut book).unwrap();
        add_birthday(&["John", "01.02.1990"], &mut book).unwrap();
        assert_eq!(birthdays(&book), "John: 01.02.1990\nJim: 03.03.1993");
    }
}
