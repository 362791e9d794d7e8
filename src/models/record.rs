//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at creation and doubles as the address book key.
/// Phones keep their insertion order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove the first phone equal to `number`. Does nothing if absent.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == number) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// `new` is validated before the lookup, so a malformed replacement is
    /// rejected even when `old` is absent. A missing `old` is otherwise a
    /// silent no-op.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => phone.set(new),
            None => Phone::new(new).map(drop),
        }
    }

    /// Find the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Parse and set the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
