use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the persisted address book snapshot.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the address book.
    ///
    /// Never fails: a missing or unreadable snapshot yields an empty book.
    fn load(&self) -> AddressBook;

    /// Persist the whole address book, replacing the previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
