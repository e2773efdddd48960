//! Performance benchmarks for the content store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use vitrine::{
    filter_posts, page_count, page_slice, Category, Collection, CollectionBackend,
    MemoryBackend, Post, PostDraft,
};

/// Build a post corpus of the given size through the real write path so
/// identifiers and timestamps look like production data.
fn corpus(size: usize) -> Vec<Post> {
    let backend = Arc::new(MemoryBackend::<Post>::new());
    let posts: Collection<Post, _> = Collection::new(Arc::clone(&backend));

    let web = Category::new("1", "Web Development", "web-development");
    let design = Category::new("3", "Design", "design");

    for i in 0..size {
        let draft = match i % 3 {
            0 => PostDraft::new(
                format!("Designing for the web, part {}", i),
                "layout, typography, and color in practice",
            )
            .with_categories(vec![design.clone()]),
            1 => PostDraft::new(
                format!("Web performance notes {}", i),
                "shaving milliseconds off page loads",
            )
            .with_categories(vec![web.clone()]),
            _ => PostDraft::new(
                format!("Studio diary {}", i),
                "what we shipped this week",
            ),
        };
        posts.create(draft).unwrap();
    }

    backend.fetch_all().unwrap()
}

/// Filtering cost across corpus sizes.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1_000, 10_000] {
        let posts = corpus(size);

        group.bench_with_input(BenchmarkId::new("search", size), &posts, |b, posts| {
            b.iter(|| black_box(filter_posts(posts, "web", None)));
        });

        group.bench_with_input(
            BenchmarkId::new("search_and_category", size),
            &posts,
            |b, posts| {
                b.iter(|| black_box(filter_posts(posts, "design", Some("design"))));
            },
        );
    }

    group.finish();
}

/// Full-snapshot recomputation cost (the per-notification work).
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [100, 1_000, 10_000] {
        let backend = Arc::new(MemoryBackend::<Post>::new());
        let posts: Collection<Post, _> = Collection::new(Arc::clone(&backend));
        for i in 0..size {
            posts
                .create(PostDraft::new(format!("Post {}", i), "body"))
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::new("fetch_all", size), &backend, |b, backend| {
            b.iter(|| black_box(backend.fetch_all().unwrap()));
        });
    }

    group.finish();
}

/// Paging is a window computation; it should be flat regardless of size.
fn bench_pagination(c: &mut Criterion) {
    let posts = corpus(10_000);
    let filtered = filter_posts(&posts, "", None);

    c.bench_function("pagination", |b| {
        b.iter(|| {
            let pages = page_count(filtered.len(), 6);
            for page in 1..=pages {
                black_box(page_slice(&filtered, page, 6));
            }
        });
    });
}

criterion_group!(benches, bench_filter, bench_snapshot, bench_pagination);
criterion_main!(benches);
