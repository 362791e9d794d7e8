//! Contact Assistant - a console bot for managing contacts and birthdays.
//!
//! The assistant keeps an address book of names, phone numbers and
//! birthdays, answers lookups, lists upcoming birthdays with weekend
//! adjustment, and persists the book to a JSON snapshot between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **handlers**: One function per command, returning a reply or an error
//! - **assistant**: The read-dispatch loop and command parsing
//! - **repositories**: Snapshot persistence
//! - **view**: Input/output boundary
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod view;

pub use assistant::{Assistant, Command};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use view::{ConsoleView, DisplayData, UserView};
