//! Unit tests for the in-memory store

use std::time::Duration;

use xerxes_core::repositories::KeyValueStore;

use crate::cache::memory_store::{InMemoryStore, SWEEP_EVERY_WRITES};

#[tokio::test(start_paused = true)]
async fn test_value_expires_after_ttl() {
    let store = InMemoryStore::new();

    store
        .set("verification:5551234567", "123456", Some(Duration::from_secs(600)))
        .await
        .unwrap();
    assert_eq!(
        store.get("verification:5551234567").await.unwrap(),
        Some("123456".to_string())
    );

    tokio::time::advance(Duration::from_secs(600)).await;
    assert_eq!(store.get("verification:5551234567").await.unwrap(), None);
    assert_eq!(store.purge_expired().await, 1);
    assert!(store.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_value_without_ttl_persists() {
    let store = InMemoryStore::new();
    store.set("user:profile:1", "{}", None).await.unwrap();

    tokio::time::advance(Duration::from_secs(86_400 * 30)).await;
    assert!(store.get("user:profile:1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_set_overwrites_and_delete() {
    let store = InMemoryStore::new();

    store.set("k", "one", None).await.unwrap();
    store.set("k", "two", None).await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some("two".to_string()));

    assert!(store.delete("k").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
    assert_eq!(store.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_sets() {
    let store = InMemoryStore::new();

    store.set_add("user:receipts:u1", "r1").await.unwrap();
    store.set_add("user:receipts:u1", "r2").await.unwrap();
    store.set_add("user:receipts:u1", "r1").await.unwrap();

    let mut members = store.set_members("user:receipts:u1").await.unwrap();
    members.sort();
    assert_eq!(members, vec!["r1", "r2"]);
    assert!(store.set_members("user:receipts:u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clones_share_data() {
    let store = InMemoryStore::new();
    let clone = store.clone();

    store.set("shared", "yes", None).await.unwrap();
    assert_eq!(clone.get("shared").await.unwrap(), Some("yes".to_string()));
    assert_eq!(clone.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_expired_codes_are_swept_by_later_writes() {
    let store = InMemoryStore::new();
    let ttl = Some(Duration::from_secs(600));

    for i in 0..1000 {
        store
            .set(&format!("verification:555{:07}", i), "123456", ttl)
            .await
            .unwrap();
    }

    tokio::time::advance(Duration::from_secs(601)).await;
    assert!(store.is_empty().await);

    // Ordinary traffic after expiry reclaims the stale codes
    for _ in 0..SWEEP_EVERY_WRITES {
        store.set("session:abc", "user-1", None).await.unwrap();
    }

    assert_eq!(store.purge_expired().await, 0);
    assert_eq!(store.len().await, 1);
}
