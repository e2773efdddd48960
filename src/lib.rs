//! # Vitrine
//!
//! An embeddable content collection store: documents live in a backend
//! collection, an in-memory mirror tracks them through push notifications,
//! and pure helpers filter and paginate the mirrored set. Built for
//! marketing sites that pair a public page with an admin panel, where the
//! backend is the sole source of truth and every view is a disposable
//! cache.
//!
//! ## Core Concepts
//!
//! - **Documents**: typed records (posts, projects) behind a backend
//!   contract, identifiers assigned on first write
//! - **Mirror**: full-replace snapshots delivered to a callback on every
//!   change, never incremental diffs
//! - **Mutations**: write-through create/update/delete with no optimistic
//!   local state
//! - **Querying**: client-side substring search, category filtering, and
//!   pagination over the mirrored sequence
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitrine::{sample_posts, Collection, MemoryBackend, Post, PostDraft};
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let posts: Collection<Post, _> = Collection::with_seeds(backend, sample_posts());
//!
//! // Seeds the empty collection, then streams every change.
//! let subscription = posts.subscribe(|items| {
//!     println!("collection now holds {} posts", items.len());
//! })?;
//!
//! posts.create(PostDraft::new("Hello", "World"))?;
//! subscription.unsubscribe();
//! ```

pub mod backend;
pub mod collection;
pub mod error;
pub mod query;
pub mod seed;
pub mod types;

// Re-exports
pub use backend::{CollectionBackend, MemoryBackend, WatchHandle, WatchId};
pub use collection::{Collection, Subscription};
pub use error::{Result, StoreError};
pub use query::{
    filter_posts, matches_category, matches_search, page_count, page_slice, page_window,
};
pub use seed::{sample_categories, sample_posts, sample_projects};
pub use types::*;
