//! JSON-file-based storage backend.
//!
//! Stores the document in a single JSON file under a configurable
//! directory (default: `$XDG_DATA_HOME/ewallet-rs/`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, WalletError};
use crate::models::Document;

use super::DocumentStorage;

/// Application name used for the XDG data directory.
const APP_NAME: &str = "ewallet-rs";

/// File holding the serialized document (the fixed storage key).
const DATA_FILE: &str = "app_data.json";
/// Sentinel file used for cross-process file locking.
const LOCK_FILE: &str = "storage.lock";

/// File-backed storage that persists the document as pretty JSON.
///
/// # Concurrency
///
/// Thread safety within a single process is provided by an in-process
/// [`Mutex`]. Cross-process safety is achieved via an advisory file lock
/// on `storage.lock`: loads take a shared lock, saves and clears an
/// exclusive one.
///
/// # File layout
///
/// ```text
/// <dir>/
///   storage.lock          (cross-process lock sentinel)
///   app_data.json
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Root directory containing the data file.
    dir: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
    /// Sentinel file for cross-process advisory locking.
    lock_file: fs::File,
}

impl FileStorage {
    /// Creates a file storage rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist and opens
    /// the `storage.lock` sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the lock
    /// file cannot be opened.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        let lock_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOCK_FILE))
            .map_err(storage_io_error)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
            lock_file,
        })
    }

    /// Returns the default XDG-compliant data directory.
    ///
    /// On Linux: `$XDG_DATA_HOME/ewallet-rs/` (typically
    /// `~/.local/share/ewallet-rs/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                WalletError::Storage("could not determine platform data directory".into())
            })
    }

    /// Returns the directory this storage writes to.
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the data file.
    #[inline]
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    /// Acquires the mutex and a shared file lock around `op`.
    fn with_shared_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock_shared().map_err(storage_io_error)?;
        let result = op();
        // The operation's own error wins over an unlock failure.
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Acquires the mutex and an exclusive file lock around `op`.
    fn with_exclusive_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock().map_err(storage_io_error)?;
        let result = op();
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }
}

impl DocumentStorage for FileStorage {
    #[tracing::instrument(skip_all, fields(path = %self.data_path().display()))]
    fn load(&self) -> Result<Option<Document>> {
        self.with_shared_lock(|| match fs::read_to_string(self.data_path()) {
            Ok(contents) => {
                let document = serde_json::from_str(&contents)?;
                tracing::debug!(bytes = contents.len(), "document loaded");
                Ok(Some(document))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_io_error(err)),
        })
    }

    #[tracing::instrument(skip_all, fields(path = %self.data_path().display()))]
    fn save(&self, document: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        self.with_exclusive_lock(|| {
            let tmp_path = self.dir.join(format!("{DATA_FILE}.tmp"));
            fs::write(&tmp_path, &json).map_err(storage_io_error)?;
            fs::rename(&tmp_path, self.data_path()).map_err(storage_io_error)?;
            tracing::debug!(bytes = json.len(), "document saved");
            Ok(())
        })
    }

    /// Deletes the data file, keeping the `storage.lock` sentinel.
    #[tracing::instrument(skip_all)]
    fn clear(&self) -> Result<()> {
        self.with_exclusive_lock(|| match fs::remove_file(self.data_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_io_error(err)),
        })
    }
}

/// Wraps an I/O error into a [`WalletError::Storage`].
fn storage_io_error(err: std::io::Error) -> WalletError {
    WalletError::Storage(Box::new(err))
}

/// Wraps a mutex poison error into a [`WalletError::Storage`].
fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> WalletError {
    WalletError::Storage(err.to_string().into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::models::{Card, CardId};

    /// Helper to create a [`FileStorage`] in a temporary directory.
    fn temp_storage() -> (FileStorage, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        (storage, dir)
    }

    #[test]
    fn load_missing_returns_none() {
        let (storage, _dir) = temp_storage();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_and_load() {
        let (storage, _dir) = temp_storage();
        let mut doc = Document::default();
        doc.cards
            .push(Card::debit("Savings", 10.0).with_id(CardId::from("c-2")));
        storage.save(&doc).unwrap();
        assert_eq!(storage.load().unwrap(), Some(doc));
    }

    #[test]
    fn saved_file_uses_camel_case_keys() {
        let (storage, _dir) = temp_storage();
        storage.save(&Document::default()).unwrap();
        let raw = fs::read_to_string(storage.data_path()).unwrap();
        assert!(raw.contains("\"transactionHistory\""));
        assert!(raw.contains("\"addFundCategories\""));
        assert!(raw.contains("\"expiryDate\""));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let (storage, _dir) = temp_storage();
        fs::write(storage.data_path(), "{not json").unwrap();
        let err = storage.load().unwrap_err();
        assert!(matches!(err, WalletError::Serialization(_)));
    }

    #[test]
    fn clear_removes_data_but_keeps_lock() {
        let (storage, dir) = temp_storage();
        storage.save(&Document::default()).unwrap();
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        assert!(dir.path().join(LOCK_FILE).exists());
        // Clearing twice is fine.
        storage.clear().unwrap();
    }

    #[test]
    fn no_tmp_file_left_behind() {
        let (storage, dir) = temp_storage();
        storage.save(&Document::default()).unwrap();
        assert!(!dir.path().join(format!("{DATA_FILE}.tmp")).exists());
    }

    #[test]
    fn new_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();
        assert_eq!(storage.dir(), nested.as_path());
        assert!(nested.join(LOCK_FILE).exists());
    }

    #[test]
    fn concurrent_saves_leave_a_readable_document() {
        let (storage, _dir) = temp_storage();
        let storage = Arc::new(storage);
        let num_threads: usize = 4;
        let saves_per_thread: usize = 20;

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_idx| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    for save_idx in 0..saves_per_thread {
                        let mut doc = Document::default();
                        doc.cards.push(Card::debit(
                            format!("Card {thread_idx}-{save_idx}"),
                            1.0,
                        ));
                        storage.save(&doc).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let doc = storage.load().unwrap().unwrap();
        assert_eq!(doc.cards.len(), 2);
    }
}
