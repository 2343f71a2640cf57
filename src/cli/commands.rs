//! Command definitions
//!
//! Maps the first word of an input line to a [`Command`] and holds the usage
//! text the `help` command prints.

/// A command the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Help,
}

/// An entry in the command table
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Names the user may type
    pub names: &'static [&'static str],
    /// Usage shown in help
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    pub command: Command,
}

/// All available commands, in help order
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["hello"],
        usage: "hello",
        description: "Greetings from the bot",
        command: Command::Hello,
    },
    CommandSpec {
        names: &["add"],
        usage: "add [name] [phone]",
        description: "Add a contact with a phone number",
        command: Command::Add,
    },
    CommandSpec {
        names: &["change"],
        usage: "change [name] [new_phone]",
        description: "Change the phone number of an existing contact",
        command: Command::Change,
    },
    CommandSpec {
        names: &["phone"],
        usage: "phone [name]",
        description: "Show the phone number of a contact",
        command: Command::Phone,
    },
    CommandSpec {
        names: &["all"],
        usage: "all",
        description: "Show all contacts",
        command: Command::All,
    },
    CommandSpec {
        names: &["add-birthday"],
        usage: "add-birthday [name] [date]",
        description: "Add a birthday to a contact",
        command: Command::AddBirthday,
    },
    CommandSpec {
        names: &["show-birthday"],
        usage: "show-birthday [name]",
        description: "Show the birthday of a contact",
        command: Command::ShowBirthday,
    },
    CommandSpec {
        names: &["birthdays"],
        usage: "birthdays",
        description: "Show all birthdays",
        command: Command::Birthdays,
    },
    CommandSpec {
        names: &["close", "exit"],
        usage: "close, exit",
        description: "Exit the program",
        command: Command::Exit,
    },
    CommandSpec {
        names: &["help"],
        usage: "help",
        description: "Show this help message",
        command: Command::Help,
    },
];

impl Command {
    /// Look up a command by the name the user typed (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.names.iter().any(|n| *n == name))
            .map(|spec| spec.command)
    }
}

/// Split an input line into a command word and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some((command, words.collect()))
}

/// One `usage - description` line per command
pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|spec| format!("{} - {}", spec.usage, spec.description))
        .collect::<Vec<_>>()
        .join("\n")
}
