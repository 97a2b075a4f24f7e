//! Pluggable storage backends for persisting the wallet document.
//!
//! The whole [`Document`] is stored as one blob under one key. Backends
//! only move that blob around; they never interpret it beyond
//! serialization.

#[cfg(feature = "storage-file")]
mod file;
mod memory;
mod queued;

#[cfg(feature = "storage-file")]
pub use file::FileStorage;
pub use memory::InMemoryStorage;
pub use queued::QueuedStorage;

use crate::error::Result;
use crate::models::Document;

/// Blocking storage backend for the wallet document.
///
/// All methods take `&self`; implementations use interior mutability
/// (e.g. `Mutex`) for thread-safe mutation.
pub trait DocumentStorage: core::fmt::Debug + Send + Sync {
    /// Reads the stored document.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read or the stored blob
    /// cannot be deserialized.
    fn load(&self) -> Result<Option<Document>>;

    /// Replaces the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn save(&self, document: &Document) -> Result<()>;

    /// Removes the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to delete.
    fn clear(&self) -> Result<()>;
}

impl<S: DocumentStorage + ?Sized> DocumentStorage for alloc::sync::Arc<S> {
    #[inline]
    fn load(&self) -> Result<Option<Document>> {
        (**self).load()
    }

    #[inline]
    fn save(&self, document: &Document) -> Result<()> {
        (**self).save(document)
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
