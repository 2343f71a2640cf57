//! Display formatting and views for terminal output

pub mod contact;
pub mod view;

pub use contact::{format_contact_line, format_contact_list, format_contact_table};
pub use view::{view_factory, ConsoleView, TableView, View};
