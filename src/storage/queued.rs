//! Fire-and-forget writer wrapping another backend.

use alloc::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread::{self, JoinHandle};

use crate::error::{Result, WalletError};
use crate::models::Document;

use super::DocumentStorage;

/// Work item for the writer thread.
#[derive(Debug)]
enum Message {
    /// Persist this document.
    Save(Box<Document>),
    /// Signal once every earlier message has been handled.
    Flush(SyncSender<()>),
}

/// Storage that performs saves on a background thread.
///
/// [`DocumentStorage::save`] queues a copy of the document and returns at
/// once. The worker writes documents in the order they were queued; a
/// failed write is logged and dropped. [`DocumentStorage::load`] and
/// [`DocumentStorage::clear`] wait for pending writes first, so they never
/// race a queued save.
///
/// Dropping the wrapper drains the queue and joins the worker.
#[derive(Debug)]
pub struct QueuedStorage<S: DocumentStorage + 'static> {
    /// Backend that does the actual I/O.
    inner: Arc<S>,
    /// Queue into the worker; `None` only while dropping.
    sender: Option<Sender<Message>>,
    /// Worker thread handle; `None` only while dropping.
    worker: Option<JoinHandle<()>>,
}

impl<S: DocumentStorage + 'static> QueuedStorage<S> {
    /// Wraps `inner` and starts the writer thread.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Storage`] if the thread cannot be spawned.
    pub fn new(inner: S) -> Result<Self> {
        let shared = Arc::new(inner);
        let (sender, receiver) = mpsc::channel();
        let backend = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("ewallet-writer".to_owned())
            .spawn(move || run_worker(backend.as_ref(), &receiver))
            .map_err(|err| WalletError::Storage(Box::new(err)))?;
        Ok(Self {
            inner: shared,
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Returns the wrapped backend.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Blocks until every save queued so far has been attempted.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Storage`] if the worker has stopped.
    pub fn flush(&self) -> Result<()> {
        let (done_tx, done_rx) = mpsc::sync_channel(1);
        self.send(Message::Flush(done_tx))?;
        done_rx
            .recv()
            .map_err(|err| WalletError::Storage(format!("writer stopped: {err}").into()))
    }

    /// Hands a message to the worker.
    fn send(&self, message: Message) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| WalletError::Storage("writer already shut down".into()))?;
        sender
            .send(message)
            .map_err(|err| WalletError::Storage(format!("writer stopped: {err}").into()))
    }
}

impl<S: DocumentStorage + 'static> DocumentStorage for QueuedStorage<S> {
    #[inline]
    fn load(&self) -> Result<Option<Document>> {
        self.flush()?;
        self.inner.load()
    }

    #[inline]
    fn save(&self, document: &Document) -> Result<()> {
        self.send(Message::Save(Box::new(document.clone())))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.flush()?;
        self.inner.clear()
    }
}

impl<S: DocumentStorage + 'static> Drop for QueuedStorage<S> {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop after the backlog.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::error!("storage writer thread panicked");
        }
    }
}

/// Drains the queue until every sender is gone.
fn run_worker<S: DocumentStorage + ?Sized>(storage: &S, receiver: &Receiver<Message>) {
    for message in receiver {
        match message {
            Message::Save(document) => {
                if let Err(err) = storage.save(&document) {
                    tracing::error!(error = %err, "queued save failed");
                }
            }
            Message::Flush(done) => {
                _ = done.send(());
            }
        }
    }
    tracing::debug!("storage writer stopped");
}
