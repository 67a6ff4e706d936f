//! Integration tests for the Redis-backed store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p xerxes_infra --test redis_integration -- --ignored

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use xerxes_core::domain::entities::{Receipt, ReceiptItem, User};
use xerxes_core::repositories::{DataRepository, DataRepositoryConfig, KeyValueStore};
use xerxes_infra::cache::{CacheConfig, CacheStore, RedisClient, RedisStoreAdapter};

async fn store() -> RedisStoreAdapter {
    let url = std::env::var("REDIS_URL")
        .unwrap_or_else(|_| "redis://:redis123@localhost:6379/0".to_string());
    let client = RedisClient::new(CacheConfig::new(url))
        .await
        .expect("Failed to connect to Redis");
    RedisStoreAdapter::new(client)
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let store = store().await;
    assert!(store.client().health_check().await.unwrap());
    assert!(CacheStore::Redis(store).health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_expiry() {
    let store = store().await;
    let key = unique("xerxes:test:expiry");

    store
        .set(&key, "123456", Some(Duration::from_secs(1)))
        .await
        .unwrap();
    assert_eq!(store.get(&key).await.unwrap(), Some("123456".to_string()));

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(store.get(&key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_repository_round_trip() {
    let store = Arc::new(store().await);
    let repo = DataRepository::with_config(store.clone(), DataRepositoryConfig::default());
    let phone = unique("555");

    repo.store_verification_code(&phone, "654321").await.unwrap();
    assert_eq!(
        repo.get_verification_code(&phone).await.unwrap(),
        Some("654321".to_string())
    );
    let ttl = store
        .client()
        .ttl(&format!("verification:{}", phone))
        .await
        .unwrap()
        .unwrap();
    assert!(ttl > 590 && ttl <= 600);

    let user = User::new(phone.clone());
    repo.store_user(&user).await.unwrap();
    assert_eq!(repo.get_user(&phone).await.unwrap(), Some(user.clone()));

    let receipt = Receipt {
        id: unique("receipt"),
        user_id: user.id.clone(),
        store_id: "store-1".to_string(),
        items: vec![ReceiptItem::new("Coffee", 1, 3.5)],
        subtotal: 3.5,
        tax: 0.35,
        total: 3.85,
        created_at: Utc::now(),
        metadata: Default::default(),
    };
    repo.store_receipt(&receipt).await.unwrap();
    assert_eq!(repo.get_user_receipts(&user.id).await.unwrap(), vec![receipt]);

    repo.clear_verification_code(&phone).await.unwrap();
    assert!(repo.get_verification_code(&phone).await.unwrap().is_none());
}
