//! Command tokens and input parsing.

use std::fmt;
use std::str::FromStr;

/// A command recognized by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Exit,
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

impl Command {
    /// The token that selects this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Close => "close",
            Command::Exit => "exit",
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
        }
    }

    /// Whether this command ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Command::Close | Command::Exit)
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "close" => Ok(Command::Close),
            "exit" => Ok(Command::Exit),
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split an input line into a command token and its arguments.
///
/// Returns `None` for a blank line. The command token is returned as
/// typed; [`Command::from_str`] matches it case-insensitively.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}
