//! Data models for the contact assistant.
//!
//! This module contains the contact record and the address book that owns
//! every record, along with the upcoming-birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{
    adjust_for_weekend, next_weekday, AddressBook, UpcomingBirthday, DEFAULT_LOOKAHEAD_DAYS,
};
pub use record::Record;
