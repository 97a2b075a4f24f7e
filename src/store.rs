//! The state store: the one live document plus command dispatch.
//!
//! [`reduce`] is the pure transition function; [`Store`] wraps it with a
//! persistence port, saving the full document after every command that
//! applies.
//!
//! # Example
//!
//! ```rust
//! use ewallet_rs::models::{Card, CategoryList};
//! use ewallet_rs::storage::InMemoryStorage;
//! use ewallet_rs::store::{Command, Store};
//!
//! let mut store = Store::open(InMemoryStorage::new());
//! store.dispatch(Command::AddCard(Card::debit("Savings", 100.0)))?;
//! store.dispatch(Command::AddCategory {
//!     list: CategoryList::AddFund,
//!     name: "Freelance".to_owned(),
//! })?;
//! assert_eq!(store.document().cards.len(), 2);
//! assert_eq!(store.storage().save_count(), 2);
//! # Ok::<(), ewallet_rs::error::WalletError>(())
//! ```

mod command;
mod reducer;

pub use command::Command;
pub use reducer::reduce;

use crate::error::Result;
use crate::models::Document;
use crate::storage::DocumentStorage;

/// Holds the live document and applies commands to it in order.
#[derive(Debug)]
pub struct Store<S: DocumentStorage> {
    /// Current document; replaced wholesale by every applied command.
    document: Document,
    /// Persistence port.
    storage: S,
    /// Number of commands applied since the store was created.
    applied: usize,
}

impl<S: DocumentStorage> Store<S> {
    /// Creates a store holding `document` without touching storage.
    #[inline]
    #[must_use]
    pub const fn new(storage: S, document: Document) -> Self {
        Self {
            document,
            storage,
            applied: 0,
        }
    }

    /// Creates a store from whatever `storage` holds.
    ///
    /// A missing or unreadable document falls back to the seed state;
    /// the fallback is not written back until the first command applies.
    #[tracing::instrument(skip_all)]
    pub fn open(storage: S) -> Self {
        let document = match storage.load() {
            Ok(Some(document)) => {
                tracing::debug!(cards = document.cards.len(), "loaded stored document");
                document
            }
            Ok(None) => {
                tracing::info!("no stored document, starting from seed state");
                Document::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored document unreadable, starting from seed state");
                Document::default()
            }
        };
        Self::new(storage, document)
    }

    /// Returns the current document.
    #[inline]
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the persistence port.
    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the port and the final document.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (S, Document) {
        (self.storage, self.document)
    }

    /// Applies `command` and persists the resulting document.
    ///
    /// Persistence failures are logged and otherwise ignored: the
    /// in-memory document stays authoritative and nothing is rolled back
    /// or retried.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error when the command is rejected; the
    /// document is then unchanged and nothing is saved.
    #[tracing::instrument(skip_all, fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        if matches!(command, Command::LoadData(_)) && self.applied > 0 {
            tracing::warn!(
                applied = self.applied,
                "replacing a document that already has local changes"
            );
        }
        let next = reduce(&self.document, command)
            .inspect_err(|err| tracing::debug!(error = %err, "command rejected"))?;
        self.document = next;
        self.applied += 1;
        if let Err(err) = self.storage.save(&self.document) {
            tracing::error!(error = %err, "failed to persist document");
        }
        Ok(())
    }
}
