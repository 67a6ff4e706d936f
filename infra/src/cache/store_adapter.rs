//! Key-value store trait adapters
//!
//! Bridges the infrastructure cache implementations to the core
//! `KeyValueStore` trait, and selects one at startup from configuration.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;
use xerxes_core::repositories::KeyValueStore;
use xerxes_shared::{CacheConfig, CacheType};

use crate::cache::memory_store::InMemoryStore;
use crate::cache::redis_client::{ttl_seconds, RedisClient};
use crate::InfrastructureError;

/// Adapter that implements the core KeyValueStore for Redis
#[derive(Clone)]
pub struct RedisStoreAdapter {
    inner: RedisClient,
}

impl RedisStoreAdapter {
    pub fn new(inner: RedisClient) -> Self {
        Self { inner }
    }

    pub fn client(&self) -> &RedisClient {
        &self.inner
    }
}

#[async_trait]
impl KeyValueStore for RedisStoreAdapter {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.inner.get(key).await.map_err(|e| e.to_string())
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), String> {
        let result = match ttl {
            Some(ttl) => self.inner.set_with_expiry(key, value, ttl_seconds(ttl)).await,
            None => self.inner.set(key, value).await,
        };
        result.map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        self.inner.delete(key).await.map_err(|e| e.to_string())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), String> {
        self.inner
            .sadd(key, member)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, String> {
        self.inner.smembers(key).await.map_err(|e| e.to_string())
    }
}

/// The store chosen by `CACHE_TYPE`
#[derive(Clone)]
pub enum CacheStore {
    Redis(RedisStoreAdapter),
    Memory(InMemoryStore),
}

impl CacheStore {
    /// Build the configured store; for Redis this waits for a successful PING
    pub async fn from_config(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        match config.cache_type {
            CacheType::Redis => {
                let client = RedisClient::new(config.clone()).await?;
                Ok(CacheStore::Redis(RedisStoreAdapter::new(client)))
            }
            CacheType::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(CacheStore::Memory(InMemoryStore::new()))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CacheStore::Redis(_) => "redis",
            CacheStore::Memory(_) => "memory",
        }
    }

    /// Whether the backing store answers; the in-memory store always does
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        match self {
            CacheStore::Redis(store) => store.client().health_check().await,
            CacheStore::Memory(_) => Ok(true),
        }
    }
}

#[async_trait]
impl KeyValueStore for CacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            CacheStore::Redis(store) => store.get(key).await,
            CacheStore::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), String> {
        match self {
            CacheStore::Redis(store) => store.set(key, value, ttl).await,
            CacheStore::Memory(store) => store.set(key, value, ttl).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        match self {
            CacheStore::Redis(store) => store.delete(key).await,
            CacheStore::Memory(store) => store.delete(key).await,
        }
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), String> {
        match self {
            CacheStore::Redis(store) => store.set_add(key, member).await,
            CacheStore::Memory(store) => store.set_add(key, member).await,
        }
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, String> {
        match self {
            CacheStore::Redis(store) => store.set_members(key).await,
            CacheStore::Memory(store) => store.set_members(key).await,
        }
    }
}
