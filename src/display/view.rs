//! Output views
//!
//! A view renders command results. The command layer only produces strings
//! and record lists; all printing goes through a [`View`].

use std::io::{self, Write};

use super::contact::{format_contact_list, format_contact_table};
use crate::config::ViewKind;
use crate::models::Record;

/// Capability set every renderer provides
pub trait View {
    /// Show a single result or error message
    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Show a list of contacts
    fn display_contacts(&mut self, records: &[Record]) -> io::Result<()>;
}

impl<V: View + ?Sized> View for Box<V> {
    fn display_message(&mut self, message: &str) -> io::Result<()> {
        (**self).display_message(message)
    }

    fn display_contacts(&mut self, records: &[Record]) -> io::Result<()> {
        (**self).display_contacts(records)
    }
}

/// Plain line-per-contact output
pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    fn display_contacts(&mut self, records: &[Record]) -> io::Result<()> {
        self.display_message(&format_contact_list(records))
    }
}

/// Tabular contact output; messages are printed as-is
pub struct TableView<W: Write> {
    out: W,
}

impl<W: Write> TableView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> View for TableView<W> {
    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    fn display_contacts(&mut self, records: &[Record]) -> io::Result<()> {
        self.display_message(&format_contact_table(records))
    }
}

/// Build the view selected by configuration
pub fn view_factory<W: Write + 'static>(kind: ViewKind, out: W) -> Box<dyn View> {
    match kind {
        ViewKind::Console => Box::new(ConsoleView::new(out)),
        ViewKind::Table => Box::new(TableView::new(out)),
    }
}
