//! Pagination windows over filtered sequences.

use std::ops::Range;

/// Total number of pages for `count` items at `per_page` per page.
///
/// `per_page` must be greater than zero.
pub fn page_count(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page)
}

/// Bounds of the visible window for a 1-based page index.
///
/// The index is not clamped: pages past the end yield an empty window.
/// Keeping it in range is the caller's job.
pub fn page_window(count: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(count);
    start.min(end)..end
}

/// The visible slice of `items` for a 1-based page index.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    &items[page_window(items.len(), page, per_page)]
}
