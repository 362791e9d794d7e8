//! The assistant's dispatch loop.
//!
//! [`Assistant`] owns the address book for the whole session: it loads the
//! book once at startup, routes each input line to a handler, and saves
//! the book once when the session ends.

pub mod command;

pub use command::{parse_input, Command};

use crate::error::CommandResult;
use crate::handlers::{self, Reply};
use crate::models::{AddressBook, DEFAULT_LOOKAHEAD_DAYS};
use crate::repositories::BookRepository;
use crate::view::{DisplayData, UserView};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, error, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

type Clock = Box<dyn Fn() -> NaiveDate>;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Console assistant bound to a snapshot repository and a view.
pub struct Assistant<R, V> {
    book: AddressBook,
    repository: R,
    view: V,
    lookahead_days: u32,
    clock: Clock,
}

impl<R: BookRepository, V: UserView> Assistant<R, V> {
    /// Create an assistant, loading the book from `repository`.
    pub fn new(repository: R, view: V) -> Self {
        let book = repository.load();
        Self {
            book,
            repository,
            view,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            clock: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Set the upcoming-birthday window used by `birthdays`.
    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    /// Replace the source of "today" used by `birthdays`.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Run the read-dispatch loop until `close`, `exit` or end of input.
    ///
    /// The book is saved before returning, including when reading input
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or saving the book fails.
    pub fn run(&mut self) -> Result<()> {
        self.view.display_message(WELCOME);

        loop {
            let line = match self.view.get_input(PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("End of input");
                    self.view.display_message(FAREWELL);
                    break;
                }
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    self.save()?;
                    return Err(e).context("Failed to read input");
                }
            };

            if self.handle_line(&line) == Flow::Stop {
                break;
            }
        }

        self.save()
    }

    /// Process one input line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let Some((token, args)) = parse_input(line) else {
            self.view.display_message(INVALID_COMMAND);
            return Flow::Continue;
        };

        let command = match token.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("{}", e);
                self.view.display_message(INVALID_COMMAND);
                return Flow::Continue;
            }
        };

        debug!("Dispatching {} with {} args", command, args.len());

        if command.is_terminal() {
            self.view.display_message(FAREWELL);
            return Flow::Stop;
        }

        let reply = execute(
            command,
            &args,
            &mut self.book,
            &self.clock,
            self.lookahead_days,
        );
        match reply {
            Ok(Reply::Message(message)) => self.view.display_message(&message),
            Ok(Reply::Birthdays(entries)) => {
                self.view.display_data(DisplayData::Birthdays(&entries))
            }
            Ok(Reply::Book(book)) => self.view.display_data(DisplayData::Book(book)),
            Err(e) => {
                debug!("{} failed: {}", command, e);
                self.view.display_message(e.user_message());
            }
        }

        Flow::Continue
    }

    fn save(&self) -> Result<()> {
        self.repository.save(&self.book).map_err(|e| {
            error!("Failed to save address book: {}", e);
            e
        })?;
        info!("Session ended with {} contacts", self.book.len());
        Ok(())
    }
}

/// Route a non-terminal command to its handler.
fn execute<'a>(
    command: Command,
    args: &[&str],
    book: &'a mut AddressBook,
    clock: &Clock,
    lookahead_days: u32,
) -> CommandResult<Reply<'a>> {
    match command {
        Command::Hello => Ok(Reply::message(GREETING)),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => handlers::show_all(args, book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::birthdays(args, book, clock(), lookahead_days),
        Command::Close | Command::Exit => Ok(Reply::message(FAREWELL)),
    }
}
