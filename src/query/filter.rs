//! Search and category filtering over an in-memory post set.

use crate::types::Post;

/// True if the post matches the free-text search.
///
/// An empty search matches everything; otherwise the lowercased title or
/// content must contain the lowercased search text. Plain substring, not
/// tokenized, not fuzzy.
pub fn matches_search(post: &Post, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    post.title.to_lowercase().contains(&needle)
        || post.content.to_lowercase().contains(&needle)
}

/// True if the post carries at least one category with the selected slug.
///
/// No selection matches everything.
pub fn matches_category(post: &Post, slug: Option<&str>) -> bool {
    match slug {
        None => true,
        Some(slug) => post.categories.iter().any(|c| c.slug == slug),
    }
}

/// Filter posts by search text and category selection.
///
/// A post is included iff it matches both rules. The output preserves the
/// input order; recomputed in full on every call, no indexing, no
/// memoization.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| matches_search(post, search) && matches_category(post, category))
        .collect()
}
