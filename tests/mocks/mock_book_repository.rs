use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::BookRepository;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

/// Mock address book repository for testing.
///
/// Holds the "persisted" book in memory, can be told to fail saves, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookRepository {
    stored: RefCell<Option<AddressBook>>,
    fail_saves: Cell<bool>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        repo.stored.replace(Some(book));
        repo
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> AddressBook {
        self.track_call("load");
        self.stored.borrow().clone().unwrap_or_default()
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if self.fail_saves.get() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }

        self.stored.replace(Some(book.clone()));
        Ok(())
    }
}
