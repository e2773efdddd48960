//! Error types for the content store.

use crate::types::DocumentId;
use thiserror::Error;

/// Main error type for collection operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Fetching collection contents failed (seeding or initial read).
    #[error("read failed: {0}")]
    Read(String),

    /// The backend rejected a create, update, or delete.
    #[error("write rejected: {0}")]
    Write(String),

    /// A write addressed an identifier the backend does not hold.
    #[error("document not found: {0}")]
    NotFound(DocumentId),

    /// The push subscription could not be established.
    #[error("subscription failed: {0}")]
    Subscription(String),
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, StoreError>;
