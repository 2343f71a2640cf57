//! Interactive session
//!
//! Reads one line at a time, dispatches it to a handler and hands the result
//! to the view. The address book is saved on `close`/`exit` and at end of
//! input.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::commands::{help_text, parse_input, Command};
use super::handlers::{
    add_birthday, add_contact, birthdays, change_contact, show_all_contacts, show_birthday,
    show_phone, FAREWELL, GREETING,
};
use crate::display::View;
use crate::error::ContactResult;
use crate::models::{AddressBook, Record};
use crate::storage::Storage;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const NO_COMMAND: &str = "You didn't enter any command.";
pub const INVALID_COMMAND: &str =
    "Invalid command. Type 'help' to see the list of available commands.";

/// What a single input line produced
#[derive(Debug, PartialEq, Eq)]
pub enum Reply<'a> {
    /// Text for `View::display_message`
    Message(String),
    /// Records for `View::display_contacts`
    Contacts(&'a [Record]),
    /// Farewell text; the session should save and stop
    Exit(String),
}

/// Run one input line against the book
///
/// Handler errors are rendered here as `Error: <message>`.
pub fn dispatch<'a>(line: &str, book: &'a mut AddressBook) -> Reply<'a> {
    let Some((name, args)) = parse_input(line) else {
        return Reply::Message(NO_COMMAND.to_string());
    };

    let Some(command) = Command::from_name(name) else {
        debug!(command = name, "unknown command");
        return Reply::Message(INVALID_COMMAND.to_string());
    };

    debug!(command = name, args = args.len(), "dispatching");

    let result = match command {
        Command::Hello => Ok(GREETING.to_string()),
        Command::Add => add_contact(&args, book),
        Command::Change => change_contact(&args, book),
        Command::Phone => show_phone(&args, book),
        Command::All => return Reply::Contacts(show_all_contacts(book)),
        Command::AddBirthday => add_birthday(&args, book),
        Command::ShowBirthday => show_birthday(&args, book),
        Command::Birthdays => Ok(birthdays(book)),
        Command::Help => Ok(help_text()),
        Command::Exit => return Reply::Exit(FAREWELL.to_string()),
    };

    match result {
        Ok(message) => Reply::Message(message),
        Err(e) => {
            debug!(command = name, error = %e, "command failed");
            Reply::Message(format!("Error: {}", e))
        }
    }
}

/// One interactive run: the book, where it is persisted and how output is shown
pub struct Session<V: View> {
    book: AddressBook,
    storage: Storage,
    view: V,
}

impl<V: View> Session<V> {
    /// Start a session with the book loaded from storage
    pub fn new(storage: Storage, view: V) -> Self {
        let book = storage.load();
        Self::with_book(book, storage, view)
    }

    pub fn with_book(book: AddressBook, storage: Storage, view: V) -> Self {
        Self {
            book,
            storage,
            view,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Read commands from `input` until `close`/`exit` or end of input
    ///
    /// Lines need not be valid UTF-8. The prompt goes to `prompt`; everything
    /// else goes through the view.
    /// Saving happens before the farewell is shown, and a failed save is
    /// returned to the caller.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut prompt: W) -> ContactResult<()> {
        self.view.display_message(WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(prompt, "{}", PROMPT)?;
            prompt.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("end of input, closing session");
                return self.storage.save(&self.book);
            }
            // Undecodable bytes become U+FFFD and fall through to normal dispatch
            let line = String::from_utf8_lossy(&buf);

            let farewell = match dispatch(&line, &mut self.book) {
                Reply::Message(message) => {
                    self.view.display_message(&message)?;
                    None
                }
                Reply::Contacts(records) => {
                    self.view.display_contacts(records)?;
                    None
                }
                Reply::Exit(message) => Some(message),
            };

            if let Some(message) = farewell {
                self.storage.save(&self.book)?;
                self.view.display_message(&message)?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ConsoleView;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    fn run_script(temp_dir: &TempDir, script: &str) -> (String, AddressBook) {
        let storage = Storage::new(temp_dir.path().join("addressbook.json"));
        let mut session = Session::new(storage, ConsoleView::new(Vec::new()));
        session.run(Cursor::new(script), io::sink()).unwrap();

        let output = String::from_utf8(session.view().get_ref().clone()).unwrap();
        (output, session.book().clone())
    }

    #[test]
    fn test_dispatch_blank_and_unknown() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("   ", &mut book),
            Reply::Message(NO_COMMAND.to_string())
        );
        assert_eq!(
            dispatch("delete John", &mut book),
            Reply::Message(INVALID_COMMAND.to_string())
        );
    }

    #[test]
    fn test_dispatch_renders_errors() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("add John 123", &mut book),
            Reply::Message("Error: Phone number must be a 10-digit number.".to_string())
        );
        assert_eq!(
            dispatch("phone", &mut book),
            Reply::Message("Error: Invalid command. Use 'phone [name]'.".to_string())
        );
    }

    #[test]
    fn test_dispatch_not_found_is_plain() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("phone Ghost", &mut book),
            Reply::Message("Contact Ghost not found.".to_string())
        );
    }

    #[test]
    fn test_dispatch_all_and_exit() {
        let mut book = AddressBook::new();
        dispatch("add John 1234567890", &mut book);

        match dispatch("all", &mut book) {
            Reply::Contacts(records) => assert_eq!(records.len(), 1),
            other => panic!("unexpected reply: {:?}", other),
        }
        assert_eq!(dispatch("close", &mut book), Reply::Exit(FAREWELL.to_string()));
        assert_eq!(dispatch("exit now", &mut book), Reply::Exit(FAREWELL.to_string()));
    }

    #[test]
    fn test_dispatch_hello_and_help() {
        let mut book = AddressBook::new();
        assert_eq!(dispatch("hello", &mut book), Reply::Message(GREETING.to_string()));
        assert_eq!(dispatch("help", &mut book), Reply::Message(help_text()));
    }

    #[test]
    fn test_session_transcript() {
        let temp_dir = TempDir::new().unwrap();
        let script = "\
hello
add John 1234567890
add John 0987654321
add-birthday John 01.02.1990
show-birthday John
all
exit
";
        let (output, book) = run_script(&temp_dir, script);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                WELCOME,
                GREETING,
                "Contact added. Phone number: 1234567890",
                "Contact updated. Phone number: 0987654321",
                "Birthday added for John.",
                "John's birthday is: 01.02.1990",
                "John: 1234567890, 0987654321, Birthday: 01.02.1990",
                FAREWELL,
            ]
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_session_stops_at_exit() {
        let temp_dir = TempDir::new().unwrap();
        let (output, book) = run_script(&temp_dir, "close\nadd John 1234567890\n");

        assert!(output.ends_with("Goodbye!\n"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_session_persists_between_runs() {
        let temp_dir = TempDir::new().unwrap();
        run_script(&temp_dir, "add John 1234567890\nchange John 5555555555\nexit\n");

        let (output, book) = run_script(&temp_dir, "phone john\nexit\n");
        assert!(output.contains("john's phone number is: 5555555555"));
        assert_eq!(book.find("John").unwrap().phone_list(), "5555555555");
    }

    #[test]
    fn test_session_survives_non_utf8_line() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("addressbook.json"));
        let mut session = Session::new(storage, ConsoleView::new(Vec::new()));

        let script: &[u8] = b"add John 1234567890\nphone \xff\xfe\n\xff\nexit\n";
        session.run(Cursor::new(script), io::sink()).unwrap();

        let output = String::from_utf8(session.view().get_ref().clone()).unwrap();
        assert!(output.contains("Contact \u{fffd}\u{fffd} not found."));
        assert!(output.contains(INVALID_COMMAND));
        assert!(output.ends_with("Goodbye!\n"));

        let reloaded = Storage::new(temp_dir.path().join("addressbook.json")).load();
        assert_eq!(reloaded.find("John").unwrap().phone_list(), "1234567890");
    }

    #[test]
    fn test_session_saves_at_end_of_input() {
        let temp_dir = TempDir::new().unwrap();
        run_script(&temp_dir, "add Jane 1112223333\n");

        let (_, book) = run_script(&temp_dir, "");
        assert!(book.find("Jane").is_some());
    }

    #[test]
    fn test_session_save_failure_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let storage = Storage::new(blocker.join("addressbook.json"));
        let mut session = Session::new(storage, ConsoleView::new(Vec::new()));
        assert!(session.run(Cursor::new("exit\n"), io::sink()).is_err());
    }
}
