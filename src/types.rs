//! Core types for the content store.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a document, assigned by the backend.
///
/// Absent on drafts; immutable once assigned; never reused after delete.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub u64);

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_micros() as i64)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// A document stored in a backend collection.
///
/// Ties the collection machinery to a concrete model: how an
/// identifier-less draft becomes a stored document, how partial updates
/// apply, and how the backend orders the collection.
pub trait Document: Clone + Send + Sync + 'static {
    /// The record-without-identifier shape consumed by create and seeding.
    type Draft: Clone + Send + Sync + 'static;

    /// Partial field replacement consumed by update.
    type Patch: Clone + Send + Sync + 'static;

    /// Materialize a draft under a freshly assigned identifier.
    fn assign(id: DocumentId, draft: Self::Draft) -> Self;

    /// The backend-assigned identifier.
    fn id(&self) -> DocumentId;

    /// Apply a partial update. Fields the patch leaves unset keep their
    /// stored value.
    fn apply(&mut self, patch: Self::Patch);

    /// Collection order. Must be total; ties break on the identifier.
    fn order(&self, other: &Self) -> Ordering;
}

/// A blog category. The slug is the stable external key used for
/// filtering and must be unique among categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub categories: Vec<Category>,
    pub created: Timestamp,
    pub updated: Timestamp,
}

/// Input for creating a post (before an identifier is assigned).
#[derive(Clone, Debug, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub categories: Vec<Category>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }
}

/// Partial update for a post. `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub categories: Option<Vec<Category>>,
}

impl Document for Post {
    type Draft = PostDraft;
    type Patch = PostPatch;

    fn assign(id: DocumentId, draft: PostDraft) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            categories: draft.categories,
            created: now,
            updated: now,
        }
    }

    fn id(&self) -> DocumentId {
        self.id
    }

    fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        self.updated = Timestamp::now();
    }

    /// Newest first; later identifier wins a timestamp tie.
    fn order(&self, other: &Self) -> Ordering {
        other
            .created
            .cmp(&self.created)
            .then_with(|| other.id.0.cmp(&self.id.0))
    }
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    /// Image reference, opaque to the store.
    pub image: String,
    /// External link, opaque to the store.
    pub link: String,
    pub tags: Vec<String>,
}

/// Input for creating a project (before an identifier is assigned).
#[derive(Clone, Debug, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub tags: Vec<String>,
}

/// Partial update for a project. `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Document for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn assign(id: DocumentId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            link: draft.link,
            tags: draft.tags,
        }
    }

    fn id(&self) -> DocumentId {
        self.id
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    /// Alphabetical by title; identifier breaks ties.
    fn order(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.id.0.cmp(&other.id.0))
    }
}
