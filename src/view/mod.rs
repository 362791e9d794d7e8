//! Input/output boundary between the assistant and the user.

mod console;

pub use console::ConsoleView;

use crate::models::{AddressBook, UpcomingBirthday};
use std::io;

/// Structured data handed to [`UserView::display_data`].
#[derive(Debug, Clone, Copy)]
pub enum DisplayData<'a> {
    /// Upcoming birthday entries
    Birthdays(&'a [UpcomingBirthday]),

    /// The whole address book
    Book(&'a AddressBook),
}

/// Presentation layer used by the dispatch loop.
pub trait UserView {
    /// Show a one-line status or result message.
    fn display_message(&mut self, message: &str);

    /// Show structured data.
    fn display_data(&mut self, data: DisplayData<'_>);

    /// Prompt for and read one line of input.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn get_input(&mut self, prompt: &str) -> io::Result<Option<String>>;
}
