//! In-memory collection backend with push notifications.

use crate::error::{Result, StoreError};
use crate::types::{Document, DocumentId};
use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{CollectionBackend, WatchHandle, WatchId};

/// Default per-watcher channel capacity before the watcher is dropped.
const DEFAULT_WATCH_BUFFER: usize = 64;

/// Registered push-notification consumer.
struct Watcher<D> {
    sender: Sender<Vec<D>>,
}

impl<D> Watcher<D> {
    /// Try to push a snapshot. Returns false if the buffer is full or the
    /// receiver is gone (watcher will be dropped).
    fn try_send(&self, snapshot: Vec<D>) -> bool {
        self.sender.try_send(snapshot).is_ok()
    }
}

/// Process-local implementation of [`CollectionBackend`].
///
/// Documents live in a map guarded by a read-write lock; identifiers come
/// from an atomic counter and are never reused. Every mutation recomputes
/// the ordered snapshot and broadcasts it to all watchers. Watchers whose
/// buffer overflows are dropped rather than blocking writers.
pub struct MemoryBackend<D: Document> {
    /// Documents by identifier.
    documents: RwLock<HashMap<DocumentId, D>>,

    /// Next document identifier to assign.
    next_id: AtomicU64,

    /// Active watchers by ID.
    watchers: RwLock<HashMap<WatchId, Watcher<D>>>,

    /// Counter for generating watcher IDs.
    next_watch: AtomicU64,

    /// Per-watcher channel capacity.
    buffer_size: usize,
}

impl<D: Document> MemoryBackend<D> {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::with_buffer(DEFAULT_WATCH_BUFFER)
    }

    /// Create an empty backend with a custom watcher buffer capacity.
    /// The capacity must be at least 1 so the registration snapshot fits.
    pub fn with_buffer(buffer_size: usize) -> Self {
        assert!(buffer_size > 0, "watch buffer must hold at least one snapshot");
        Self {
            documents: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            watchers: RwLock::new(HashMap::new()),
            next_watch: AtomicU64::new(1),
            buffer_size,
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// True if no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Number of active watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.read().len()
    }

    /// The full contents in collection order.
    fn snapshot(&self) -> Vec<D> {
        let mut items: Vec<D> = self.documents.read().values().cloned().collect();
        items.sort_by(|a, b| a.order(b));
        items
    }

    /// Broadcast the current snapshot to every watcher, dropping the ones
    /// that cannot receive.
    fn notify(&self) {
        let snapshot = self.snapshot();
        let mut to_remove = Vec::new();

        {
            let watchers = self.watchers.read();
            for (id, watcher) in watchers.iter() {
                if !watcher.try_send(snapshot.clone()) {
                    to_remove.push(*id);
                }
            }
        }

        if !to_remove.is_empty() {
            let mut watchers = self.watchers.write();
            for id in to_remove {
                watchers.remove(&id);
            }
        }
    }
}

impl<D: Document> CollectionBackend<D> for MemoryBackend<D> {
    fn fetch_all(&self) -> Result<Vec<D>> {
        Ok(self.snapshot())
    }

    fn insert(&self, draft: D::Draft) -> Result<D> {
        let id = DocumentId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let document = D::assign(id, draft);
        self.documents.write().insert(id, document.clone());
        self.notify();
        Ok(document)
    }

    fn update(&self, id: DocumentId, patch: D::Patch) -> Result<()> {
        {
            let mut documents = self.documents.write();
            let document = documents.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            document.apply(patch);
        }
        self.notify();
        Ok(())
    }

    fn delete(&self, id: DocumentId) -> Result<()> {
        {
            let mut documents = self.documents.write();
            if documents.remove(&id).is_none() {
                return Err(StoreError::NotFound(id));
            }
        }
        self.notify();
        Ok(())
    }

    fn watch(&self) -> WatchHandle<D> {
        let id = WatchId(self.next_watch.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(self.buffer_size);

        // Registry lock held across the initial send so a concurrent
        // mutation cannot slip between the snapshot and registration.
        let mut watchers = self.watchers.write();
        let _ = sender.try_send(self.snapshot());
        watchers.insert(id, Watcher { sender });

        WatchHandle { id, receiver }
    }

    fn unwatch(&self, id: WatchId) {
        self.watchers.write().remove(&id);
    }
}

impl<D: Document> Default for MemoryBackend<D> {
    fn default() -> Self {
        Self::new()
    }
}
