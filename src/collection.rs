//! Collection facade tying seeding, live mirroring, and mutations together.

use crate::backend::CollectionBackend;
use crate::error::{Result, StoreError};
use crate::types::{Document, DocumentId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// A typed view over one backend collection.
///
/// Provides the live mirror ([`subscribe`](Collection::subscribe)), the
/// write-through mutation surface ([`create`](Collection::create),
/// [`update`](Collection::update), [`delete`](Collection::delete)), and
/// one-time seeding of an empty collection.
pub struct Collection<D: Document, B: CollectionBackend<D>> {
    backend: Arc<B>,

    /// Drafts written to an empty collection on first use.
    seeds: Vec<D::Draft>,

    /// Seeding guard. Owned by the collection, so a fresh construction
    /// starts unseeded; set only after a fully successful pass.
    seeded: Mutex<bool>,
}

impl<D, B> Collection<D, B>
where
    D: Document,
    B: CollectionBackend<D>,
{
    /// Create a collection over a backend with no seed data.
    pub fn new(backend: Arc<B>) -> Self {
        Self::with_seeds(backend, Vec::new())
    }

    /// Create a collection that seeds an empty backend on first use.
    pub fn with_seeds(backend: Arc<B>, seeds: Vec<D::Draft>) -> Self {
        Self {
            backend,
            seeds,
            seeded: Mutex::new(false),
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    // --- Seeding ---

    /// Write the seed list into an empty collection, at most once per
    /// collection instance.
    ///
    /// The first call fetches the full collection; if and only if it is
    /// empty, each seed draft is inserted under a fresh backend-assigned
    /// identifier. Later calls return immediately, even if the collection
    /// has been emptied since. A failed pass leaves the guard unset so the
    /// next subscription retries; the insert loop is not transactional and
    /// a partial failure leaves the documents written so far in place.
    pub fn ensure_seeded(&self) -> Result<()> {
        let mut seeded = self.seeded.lock();
        if *seeded {
            return Ok(());
        }

        let existing = self.backend.fetch_all()?;
        if existing.is_empty() {
            tracing::debug!("seeding empty collection with {} documents", self.seeds.len());
            for draft in &self.seeds {
                self.backend.insert(draft.clone())?;
            }
        }

        *seeded = true;
        Ok(())
    }

    // --- Live mirror ---

    /// Open a live mirror of the collection.
    ///
    /// Seeds the collection first if this instance has not done so yet,
    /// then delivers the full ordered contents to `on_change`: once for
    /// the snapshot current at registration and again after every change.
    /// Delivery happens on a dedicated thread, never synchronously from
    /// this call.
    ///
    /// The returned handle terminates the subscription when invoked (or
    /// dropped). A notification racing the termination may still deliver
    /// once; this is accepted, not corrected.
    pub fn subscribe<F>(&self, mut on_change: F) -> Result<Subscription>
    where
        F: FnMut(Vec<D>) + Send + 'static,
    {
        self.ensure_seeded()?;

        let handle = self.backend.watch();
        let watch_id = handle.id;
        let receiver = handle.receiver;

        let stopped = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&stopped);

        // Detached: the thread exits when the watcher is deregistered and
        // its channel disconnects.
        let _ = thread::Builder::new()
            .name("collection-mirror".into())
            .spawn(move || {
                while let Ok(items) = receiver.recv() {
                    if stop.load(Ordering::SeqCst) {
                        break;
                    }
                    on_change(items);
                }
            })
            .map_err(|e| StoreError::Subscription(e.to_string()))?;

        let backend = Arc::clone(&self.backend);
        Ok(Subscription {
            stopped,
            cancel: Some(Box::new(move || backend.unwatch(watch_id))),
        })
    }

    // --- Mutations ---

    /// Store a new document and return it with its assigned identifier.
    ///
    /// There is no optimistic local insert; the mirror reflects the write
    /// on its next push notification.
    pub fn create(&self, draft: D::Draft) -> Result<D> {
        self.backend.insert(draft).map_err(|e| {
            tracing::error!("failed to create document: {}", e);
            e
        })
    }

    /// Apply a partial update to an existing document. Fields the patch
    /// leaves unset keep their stored value.
    pub fn update(&self, id: DocumentId, patch: D::Patch) -> Result<()> {
        self.backend.update(id, patch).map_err(|e| {
            tracing::error!("failed to update document {}: {}", id, e);
            e
        })
    }

    /// Remove a document. The identifier is permanently retired; no
    /// tombstone is kept.
    pub fn delete(&self, id: DocumentId) -> Result<()> {
        self.backend.delete(id).map_err(|e| {
            tracing::error!("failed to delete document {}: {}", id, e);
            e
        })
    }
}

/// Cancellation handle for a live mirror.
///
/// Two states, one legal transition: subscribed until
/// [`unsubscribe`](Subscription::unsubscribe) runs (explicitly or via
/// drop), then terminally unsubscribed.
pub struct Subscription {
    stopped: Arc<AtomicBool>,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Terminate the subscription.
    ///
    /// Deregisters the watcher and stops the delivery thread; after this
    /// returns no further callbacks run, apart from one notification that
    /// may already be in flight.
    pub fn unsubscribe(mut self) {
        self.terminate();
    }

    fn terminate(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.terminate();
    }
}
