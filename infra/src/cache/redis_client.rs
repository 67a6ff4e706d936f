//! Redis cache client implementation
//!
//! This module provides a Redis client over a single multiplexed connection
//! with a retrying connectivity check at startup and a response deadline on
//! every operation. It stores verification codes, user profiles, sessions
//! and receipts as plain string values, plus string sets for receipt indexes.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisResult};
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};
use xerxes_shared::CacheConfig;

use crate::InfrastructureError;

type RedisFuture<T> = Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>;

/// Redis cache client
///
/// Cloning is cheap: clones share the underlying multiplexed connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Connect to Redis and confirm the server answers PING
    ///
    /// Connection and PING are attempted up to `config.connect_retries`
    /// times, sleeping `config.connect_retry_delay_ms` between attempts.
    ///
    /// # Example
    /// ```no_run
    /// use xerxes_shared::CacheConfig;
    /// use xerxes_infra::cache::RedisClient;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://:redis123@localhost:6379/0");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!(
            url = %mask_url(&config.url),
            pool_size = config.pool_size,
            min_idle = config.min_idle,
            "Creating Redis client"
        );

        // Parse Redis URL and create client
        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::connect_with_retry(&client, &config).await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    /// Open a connection and PING it, retrying with a fixed delay
    async fn connect_with_retry(
        client: &Client,
        config: &CacheConfig,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let max_attempts = config.connect_retries.max(1);
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match Self::connect_once(client, config).await {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_attempts => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_attempts, e, config.connect_retry_delay_ms
                    );
                    sleep(config.connect_retry_delay()).await;
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts, e
                    );
                    return Err(e);
                }
            }
        }
    }

    async fn connect_once(
        client: &Client,
        config: &CacheConfig,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut connection = timeout(
            config.connection_timeout(),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| InfrastructureError::Timeout("connecting to Redis".to_string()))??;

        let pong = timeout(
            config.response_timeout(),
            redis::cmd("PING").query_async::<_, String>(&mut connection),
        )
        .await
        .map_err(|_| InfrastructureError::Timeout("PING".to_string()))??;

        if pong != "PONG" {
            return Err(InfrastructureError::Config(format!(
                "unexpected PING response: {}",
                pong
            )));
        }
        Ok(connection)
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Set a key with an expiry in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        let key_owned = key.to_string();
        let value = value.to_string();
        // SETEX rejects a zero expiry
        let expiry = expiry_seconds.max(1);

        self.execute("SETEX", key, move |mut conn| {
            Box::pin(async move { conn.set_ex::<_, _, ()>(key_owned, value, expiry).await })
        })
        .await
    }

    /// Set a key without expiry
    pub async fn set(&self, key: &str, value: &str) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' without expiry", key);

        let key_owned = key.to_string();
        let value = value.to_string();

        self.execute("SET", key, move |mut conn| {
            Box::pin(async move { conn.set::<_, _, ()>(key_owned, value).await })
        })
        .await
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let key_owned = key.to_string();
        let value = self
            .execute("GET", key, move |mut conn| {
                Box::pin(async move { conn.get::<_, Option<String>>(key_owned).await })
            })
            .await?;

        if value.is_none() {
            debug!("Key '{}' not found", key);
        }
        Ok(value)
    }

    /// Delete a key, returning whether it existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let key_owned = key.to_string();
        let deleted_count = self
            .execute("DEL", key, move |mut conn| {
                Box::pin(async move { conn.del::<_, u32>(key_owned).await })
            })
            .await?;

        Ok(deleted_count > 0)
    }

    /// Add a member to a set, returning whether it was newly added
    pub async fn sadd(&self, key: &str, member: &str) -> Result<bool, InfrastructureError> {
        debug!("Adding member to set '{}'", key);

        let key_owned = key.to_string();
        let member = member.to_string();
        let added = self
            .execute("SADD", key, move |mut conn| {
                Box::pin(async move { conn.sadd::<_, _, u32>(key_owned, member).await })
            })
            .await?;

        Ok(added > 0)
    }

    pub async fn smembers(&self, key: &str) -> Result<Vec<String>, InfrastructureError> {
        debug!("Reading members of set '{}'", key);

        let key_owned = key.to_string();
        self.execute("SMEMBERS", key, move |mut conn| {
            Box::pin(async move { conn.smembers::<_, Vec<String>>(key_owned).await })
        })
        .await
    }

    /// Remaining lifetime of a key in seconds; `None` if missing or persistent
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let key_owned = key.to_string();
        let ttl = self
            .execute("TTL", key, move |mut conn| {
                Box::pin(async move { conn.ttl::<_, i64>(key_owned).await })
            })
            .await?;

        Ok((ttl >= 0).then_some(ttl))
    }

    /// Check that the server answers PING
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let response = self
            .execute("PING", "-", |mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await?;

        if response == "PONG" {
            Ok(true)
        } else {
            warn!("Redis health check returned unexpected response: {}", response);
            Ok(false)
        }
    }

    /// Run one command on a clone of the shared connection under the response deadline
    async fn execute<T, F>(&self, command: &str, key: &str, operation: F) -> Result<T, InfrastructureError>
    where
        F: FnOnce(MultiplexedConnection) -> RedisFuture<T>,
    {
        let deadline = self.config.response_timeout();

        match timeout(deadline, operation(self.connection.clone())).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("Redis {} on '{}' failed: {}", command, key, e);
                Err(InfrastructureError::Cache(e))
            }
            Err(_) => {
                error!(
                    "Redis {} on '{}' timed out after {}ms",
                    command,
                    key,
                    deadline.as_millis()
                );
                Err(InfrastructureError::Timeout(format!(
                    "{} on '{}' after {:?}",
                    command, key, deadline
                )))
            }
        }
    }
}

/// Hide credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}

/// Convert a store TTL into whole seconds, rounding sub-second values up
pub(crate) fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs();
    if ttl.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
