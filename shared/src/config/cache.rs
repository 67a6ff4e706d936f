//! Cache configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::env_or;

/// Backing store used for verification codes, users and receipts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    /// Redis server (production)
    #[default]
    Redis,
    /// Process-local store (development and tests)
    Memory,
}

impl std::str::FromStr for CacheType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CacheType::Redis),
            "memory" | "in-memory" => Ok(CacheType::Memory),
            _ => Err(format!("Invalid cache type: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Which store implementation to use
    #[serde(default)]
    pub cache_type: CacheType,

    /// Redis connection URL, including credentials and database number
    /// (e.g. `redis://:password@localhost:6379/0`)
    pub url: String,

    /// Maximum number of connections in the pool
    pub pool_size: u32,

    /// Minimum number of idle connections kept open
    pub min_idle: u32,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Response (read/write) timeout in seconds
    pub response_timeout: u64,

    /// Connectivity checks attempted at startup before giving up
    pub connect_retries: u32,

    /// Fixed delay between startup connectivity checks in milliseconds
    pub connect_retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: CacheType::Redis,
            url: String::from("redis://:redis123@localhost:6379/0"),
            pool_size: 10,
            min_idle: 5,
            connection_timeout: 5,
            response_timeout: 3,
            connect_retries: 5,
            connect_retry_delay_ms: 2000,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_type: env_or("CACHE_TYPE", defaults.cache_type),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            pool_size: env_or("REDIS_POOL_SIZE", defaults.pool_size),
            min_idle: env_or("REDIS_MIN_IDLE", defaults.min_idle),
            connection_timeout: env_or("REDIS_CONNECT_TIMEOUT_SECS", defaults.connection_timeout),
            response_timeout: env_or("REDIS_RESPONSE_TIMEOUT_SECS", defaults.response_timeout),
            connect_retries: env_or("REDIS_CONNECT_RETRIES", defaults.connect_retries),
            connect_retry_delay_ms: env_or(
                "REDIS_CONNECT_RETRY_DELAY_MS",
                defaults.connect_retry_delay_ms,
            ),
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Use the in-memory store instead of Redis
    pub fn in_memory() -> Self {
        Self {
            cache_type: CacheType::Memory,
            ..Default::default()
        }
    }

    /// Connection timeout as a `Duration`
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    /// Per-operation response timeout as a `Duration`
    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout)
    }

    /// Delay between startup connectivity checks as a `Duration`
    pub fn connect_retry_delay(&self) -> Duration {
        Duration::from_millis(self.connect_retry_delay_ms)
    }
}
