//! Contact and phone command handlers.

use super::{exact_args, leading_args, Reply};
use crate::domain::{Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};

/// `add <name> <phone>`: create the contact if needed and append a phone.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<Reply<'static>> {
    let [name, phone] = leading_args(args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Reply::message("Contact updated."));
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Reply::message("Contact added."))
}

/// `change <name> <old_phone> <new_phone>`: replace an existing phone.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<Reply<'static>> {
    let [name, old_phone, new_phone] = exact_args(args)?;

    let record = book
        .find_mut(name)
        .filter(|record| record.find_phone(old_phone).is_some())
        .ok_or_else(|| CommandError::NotFound(format!("{} {}", name, old_phone)))?;

    record.edit_phone(old_phone, new_phone)?;
    Ok(Reply::message("Contact updated."))
}

/// `phone <name>`: list the contact's phones.
pub fn show_phone<'a>(args: &[&str], book: &'a AddressBook) -> CommandResult<Reply<'a>> {
    let [name] = leading_args(args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Ok(Reply::message("No phones"));
    }

    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(Reply::Message(phones.join("; ")))
}

/// `all`: the whole address book.
pub fn show_all<'a>(_args: &[&str], book: &'a AddressBook) -> CommandResult<Reply<'a>> {
    Ok(Reply::Book(book))
}
