use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Address book repository backed by a JSON file on disk.
///
/// The file handle is held only for the duration of a single load or
/// save. Saves go through a sibling temporary file that is renamed over
/// the target, so an interrupted save leaves the previous snapshot intact.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, returning `Ok(None)` when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn try_load(&self) -> StorageResult<Option<AddressBook>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let book = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(book))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> AddressBook {
        match self.try_load() {
            Ok(Some(book)) => {
                info!(
                    "Loaded {} contacts from {}",
                    book.len(),
                    self.path.display()
                );
                book
            }
            Ok(None) => {
                info!(
                    "No address book at {}, starting empty",
                    self.path.display()
                );
                AddressBook::new()
            }
            Err(e) => {
                warn!(
                    "Failed to read address book at {}: {}; starting empty",
                    self.path.display(),
                    e
                );
                AddressBook::new()
            }
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let temp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            serde_json::to_writer_pretty(&mut writer, book)?;
            writer.flush()?;
        }
        fs::rename(&temp_path, &self.path)?;

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
