//! Client-side querying over mirrored collections.
//!
//! Both halves are pure transforms over the in-memory sequence the mirror
//! delivers: filtering recomputes the visible subset on every input
//! change, paging maps the filtered count to a visible window. Nothing
//! here touches the backend.

mod filter;
mod page;

pub use filter::{filter_posts, matches_category, matches_search};
pub use page::{page_count, page_slice, page_window};
