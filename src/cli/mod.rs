//! Interactive command layer
//!
//! Parses input lines into commands, runs the matching handler against the
//! address book and drives the read/dispatch/display loop.

pub mod commands;
pub mod handlers;
pub mod repl;

pub use commands::{help_text, parse_input, Command, COMMANDS};
pub use repl::{dispatch, Reply, Session};
