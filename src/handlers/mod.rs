//! Command handlers.
//!
//! Each handler takes the command arguments and the address book and
//! returns a [`Reply`] or a [`CommandError`](crate::error::CommandError).
//! Handlers never print; the dispatch loop renders replies and
//! normalizes errors in one place.

mod birthday;
mod contact;

pub use birthday::{add_birthday, birthdays, show_birthday};
pub use contact::{add_contact, change_contact, show_all, show_phone};

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, UpcomingBirthday};

/// Successful outcome of a command handler.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply<'a> {
    /// A short message for the user
    Message(String),

    /// Upcoming birthdays, in book order
    Birthdays(Vec<UpcomingBirthday>),

    /// The whole address book, for bulk display
    Book(&'a AddressBook),
}

impl Reply<'_> {
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }
}

/// Take exactly `N` arguments.
///
/// Fewer arguments is `MissingArguments`; more is `UnexpectedArguments`.
fn exact_args<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    if args.len() > N {
        return Err(CommandError::UnexpectedArguments(args[N..].join(" ")));
    }
    leading_args(args)
}

/// Take the first `N` arguments, ignoring any extras.
///
/// A bare `phone` or `show-birthday` therefore asks for arguments instead
/// of looking up an empty name and answering "Name not found.".
fn leading_args<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&str; N]>::try_from(head).ok())
        .ok_or(CommandError::MissingArguments)
}
