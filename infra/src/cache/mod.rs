//! Cache module for Redis-based and in-memory storage
//!
//! This module provides the Redis client, a process-local store, and the
//! adapters that expose both through the core `KeyValueStore` trait.

pub mod memory_store;
pub mod redis_client;
pub mod store_adapter;

#[cfg(test)]
mod tests;

pub use memory_store::InMemoryStore;
pub use redis_client::RedisClient;
pub use store_adapter::{CacheStore, RedisStoreAdapter};

// Re-export commonly used types
pub use xerxes_shared::CacheConfig;
