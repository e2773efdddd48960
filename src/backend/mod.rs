//! Backend collection contract and the bundled in-memory implementation.
//!
//! The store core is written against [`CollectionBackend`], a
//! document-oriented collection API: get-all (in collection order), add,
//! update-by-id, delete-by-id, and subscribe-with-push. Push notifications
//! carry the collection's full ordered contents after every change, never
//! an incremental diff.
//!
//! [`MemoryBackend`] implements the contract in-process; adapters over
//! hosted document databases are the embedder's concern.

mod memory;

pub use memory::MemoryBackend;

use crate::error::Result;
use crate::types::{Document, DocumentId};
use crossbeam_channel::Receiver;

/// Unique identifier for a registered watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

/// Handle for receiving push notifications.
///
/// The first notification is the snapshot current at registration time;
/// each subsequent one is the full recomputed sequence after a change.
pub struct WatchHandle<D> {
    pub id: WatchId,
    /// Channel of full-state snapshots.
    pub receiver: Receiver<Vec<D>>,
}

impl<D> WatchHandle<D> {
    /// Receive the next snapshot (blocking).
    pub fn recv(&self) -> std::result::Result<Vec<D>, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a snapshot (non-blocking).
    pub fn try_recv(&self) -> std::result::Result<Vec<D>, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> std::result::Result<Vec<D>, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Document-oriented collection API.
///
/// The backend is the sole source of truth: mirrors built on top of it are
/// disposable caches rebuilt from every push notification.
pub trait CollectionBackend<D: Document>: Send + Sync + 'static {
    /// All documents, in collection order.
    fn fetch_all(&self) -> Result<Vec<D>>;

    /// Store a draft under a freshly assigned identifier and return the
    /// stored document.
    fn insert(&self, draft: D::Draft) -> Result<D>;

    /// Apply a partial update to an existing document.
    fn update(&self, id: DocumentId, patch: D::Patch) -> Result<()>;

    /// Remove a document. The identifier is retired and never reused.
    fn delete(&self, id: DocumentId) -> Result<()>;

    /// Register a push watcher. The current snapshot is queued before the
    /// handle is returned, so a watcher never observes a gap.
    fn watch(&self) -> WatchHandle<D>;

    /// Deregister a watcher; its channel disconnects.
    fn unwatch(&self, id: WatchId);
}
