//! Birthday command handlers.

use super::{exact_args, leading_args, Reply};
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::NaiveDate;

/// `add-birthday <name> <DD-MM-YYYY>`: set the contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<Reply<'static>> {
    let [name, date] = exact_args(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    record.add_birthday(date)?;
    Ok(Reply::message("Birthday added."))
}

/// `show-birthday <name>`: the contact's birthday as `DD-MM-YYYY`.
pub fn show_birthday<'a>(args: &[&str], book: &'a AddressBook) -> CommandResult<Reply<'a>> {
    let [name] = leading_args(args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    Ok(match record.birthday() {
        Some(birthday) => Reply::Message(birthday.to_string()),
        None => Reply::message("No birthday for this contact."),
    })
}

/// `birthdays`: contacts to congratulate within `days` days of `today`.
pub fn birthdays(
    _args: &[&str],
    book: &AddressBook,
    today: NaiveDate,
    days: u32,
) -> CommandResult<Reply<'static>> {
    let upcoming = book.get_upcoming_birthdays(today, days);
    if upcoming.is_empty() {
        return Ok(Reply::message("No upcoming birthdays."));
    }
    Ok(Reply::Birthdays(upcoming))
}
