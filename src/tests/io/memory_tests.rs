//! Tests for in-memory fetch and store implementations.

use std::io::ErrorKind;

use crate::{AsyncFetch, AsyncStore, InMemoryFetcher, InMemoryStore};

#[tokio::test]
async fn in_memory_fetcher_serves_entries_and_records_calls() {
    let fetcher = InMemoryFetcher::new([("a", "hello")]);
    let handle = fetcher.clone();

    assert_eq!(fetcher.fetch("a").await.unwrap(), "hello");
    let err = fetcher.fetch("b").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Clones share the call log.
    assert_eq!(handle.calls(), vec!["a".to_string(), "b".to_string()]);
    handle.clear_calls();
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn in_memory_store_overwrites_and_rejects() {
    let store = InMemoryStore::new().reject("ro");

    store.store("out", "abc").await.unwrap();
    store.store("out", "def").await.unwrap();
    assert_eq!(store.get("out").as_deref(), Some("def"));
    assert_eq!(store.len(), 1);

    let err = store.store("ro", "x").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);

    let err = store.store("", "x").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
