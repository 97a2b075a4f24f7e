//! In-memory storage backend for testing.

use std::sync::Mutex;

use crate::error::{Result, WalletError};
use crate::models::Document;

use super::DocumentStorage;

/// Thread-safe in-memory storage for tests.
///
/// Also counts successful saves so tests can assert how often the store
/// persisted.
///
/// # Example
///
/// ```rust
/// use ewallet_rs::storage::{DocumentStorage, InMemoryStorage};
/// use ewallet_rs::models::Document;
///
/// let storage = InMemoryStorage::new();
/// storage.save(&Document::default()).unwrap();
/// assert_eq!(storage.save_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// All state behind a single mutex.
    inner: Mutex<Inner>,
}

/// Inner mutable state.
#[derive(Debug, Default)]
struct Inner {
    /// Stored document, if any.
    document: Option<Document>,
    /// Number of successful saves.
    saves: usize,
}

impl InMemoryStorage {
    /// Creates an empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage that already holds `document`.
    #[inline]
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            inner: Mutex::new(Inner {
                document: Some(document),
                saves: 0,
            }),
        }
    }

    /// Returns the number of successful saves so far.
    #[inline]
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.with_lock(|inner| inner.saves).unwrap_or_default()
    }

    /// Returns a copy of the stored document without going through
    /// [`DocumentStorage::load`].
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Option<Document> {
        self.with_lock(|inner| inner.document.clone())
            .ok()
            .flatten()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> Result<R> {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut inner))
    }
}

/// Converts a mutex poison error into a [`WalletError`].
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> WalletError {
    WalletError::Storage(err.to_string().into())
}

impl DocumentStorage for InMemoryStorage {
    #[inline]
    fn load(&self) -> Result<Option<Document>> {
        self.with_lock(|inner| inner.document.clone())
    }

    #[inline]
    fn save(&self, document: &Document) -> Result<()> {
        self.with_lock(|inner| {
            inner.document = Some(document.clone());
            inner.saves += 1;
        })
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(|inner| inner.document = None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_loads_none() {
        let storage = InMemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn save_then_load_and_count() {
        let storage = InMemoryStorage::new();
        let doc = Document::default();
        storage.save(&doc).unwrap();
        storage.save(&doc).unwrap();
        assert_eq!(storage.load().unwrap(), Some(doc));
        assert_eq!(storage.save_count(), 2);
    }

    #[test]
    fn clear_forgets_document() {
        let storage = InMemoryStorage::with_document(Document::default());
        assert!(storage.snapshot().is_some());
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
