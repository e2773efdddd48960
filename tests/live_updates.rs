//! Behavior of live mirror subscriptions under concurrent use.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use vitrine::{Collection, CollectionBackend, MemoryBackend, Post, PostDraft};

fn empty_posts() -> Collection<Post, MemoryBackend<Post>> {
    Collection::new(Arc::new(MemoryBackend::new()))
}

#[test]
fn test_two_subscribers_both_observe_a_write() {
    let posts = empty_posts();
    let (tx_a, rx_a) = mpsc::channel();
    let (tx_b, rx_b) = mpsc::channel();

    let sub_a = posts
        .subscribe(move |items: Vec<Post>| {
            let _ = tx_a.send(items.len());
        })
        .unwrap();
    let sub_b = posts
        .subscribe(move |items: Vec<Post>| {
            let _ = tx_b.send(items.len());
        })
        .unwrap();

    // Both initial snapshots are empty.
    assert_eq!(rx_a.recv_timeout(Duration::from_secs(1)).unwrap(), 0);
    assert_eq!(rx_b.recv_timeout(Duration::from_secs(1)).unwrap(), 0);

    posts.create(PostDraft::new("shared", "")).unwrap();

    assert_eq!(rx_a.recv_timeout(Duration::from_secs(1)).unwrap(), 1);
    assert_eq!(rx_b.recv_timeout(Duration::from_secs(1)).unwrap(), 1);

    sub_a.unsubscribe();
    sub_b.unsubscribe();
}

#[test]
fn test_callback_runs_off_the_subscribing_thread() {
    let posts = empty_posts();
    let (tx, rx) = mpsc::channel();

    let subscription = posts
        .subscribe(move |_items: Vec<Post>| {
            let _ = tx.send(thread::current().id());
        })
        .unwrap();

    let delivery_thread = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_ne!(delivery_thread, thread::current().id());

    subscription.unsubscribe();
}

#[test]
fn test_dropping_the_handle_terminates_the_subscription() {
    let posts = empty_posts();
    let (tx, rx) = mpsc::channel();

    {
        let _subscription = posts
            .subscribe(move |items: Vec<Post>| {
                let _ = tx.send(items.len());
            })
            .unwrap();
        rx.recv_timeout(Duration::from_secs(1)).unwrap();
        // Falls out of scope here.
    }

    assert_eq!(posts.backend().watcher_count(), 0);

    thread::sleep(Duration::from_millis(50));
    posts.create(PostDraft::new("after drop", "")).unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn test_unsubscribed_watcher_is_deregistered() {
    let posts = empty_posts();

    let subscription = posts.subscribe(|_items: Vec<Post>| {}).unwrap();
    assert_eq!(posts.backend().watcher_count(), 1);

    subscription.unsubscribe();
    assert_eq!(posts.backend().watcher_count(), 0);
}

#[test]
fn test_writes_from_another_thread_reach_the_mirror() {
    let backend = Arc::new(MemoryBackend::new());
    let posts: Collection<Post, _> = Collection::new(Arc::clone(&backend));
    let (tx, rx) = mpsc::channel();

    let subscription = posts
        .subscribe(move |items: Vec<Post>| {
            let _ = tx.send(items.len());
        })
        .unwrap();
    assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), 0);

    let writer_backend = Arc::clone(&backend);
    let writer = thread::spawn(move || {
        for i in 0..5 {
            writer_backend
                .insert(PostDraft::new(format!("post {}", i), ""))
                .unwrap();
        }
    });
    writer.join().unwrap();

    // Snapshots arrive in emission order; the last one holds all five.
    let mut latest = 0;
    for _ in 0..5 {
        latest = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    }
    assert_eq!(latest, 5);

    subscription.unsubscribe();
}
