//! Key-value store trait: the seam between the repository and its backend.
//!
//! Keys and values are plain strings. Implementations live in the
//! infrastructure layer (Redis, in-process memory) and report failures as
//! strings, which the repository maps onto domain errors.

use std::time::Duration;

use async_trait::async_trait;

/// String key-value store with optional per-key expiry and string sets
///
/// # Example Implementation
/// ```no_run
/// use std::time::Duration;
/// use async_trait::async_trait;
/// use xerxes_core::repositories::KeyValueStore;
///
/// struct NullStore;
///
/// #[async_trait]
/// impl KeyValueStore for NullStore {
///     async fn get(&self, _key: &str) -> Result<Option<String>, String> {
///         Ok(None)
///     }
///
///     async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> Result<(), String> {
///         Ok(())
///     }
///
///     async fn delete(&self, _key: &str) -> Result<bool, String> {
///         Ok(false)
///     }
///
///     async fn set_add(&self, _key: &str, _member: &str) -> Result<(), String> {
///         Ok(())
///     }
///
///     async fn set_members(&self, _key: &str) -> Result<Vec<String>, String> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; expired and missing keys both yield `Ok(None)`
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Write a value, replacing any previous one
    ///
    /// `None` stores the value without expiry. `Some(ttl)` makes reads
    /// return absent once `ttl` has elapsed.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), String>;

    /// Remove a key, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool, String>;

    /// Add a member to the set stored at `key`
    async fn set_add(&self, key: &str, member: &str) -> Result<(), String>;

    /// All members of the set stored at `key`, in no particular order
    async fn set_members(&self, key: &str) -> Result<Vec<String>, String>;
}
