//! Process-local key-value store
//!
//! Used when `CACHE_TYPE=memory` and by integration tests. Expiry is checked
//! lazily against tokio's clock, so paused-time tests can advance past a TTL.
//! Expired entries are swept out every `SWEEP_EVERY_WRITES` writes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use xerxes_core::repositories::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

/// Number of `set` calls between sweeps of expired entries
pub(crate) const SWEEP_EVERY_WRITES: usize = 256;

#[derive(Default)]
struct Inner {
    values: HashMap<String, Entry>,
    sets: HashMap<String, HashSet<String>>,
    writes_since_sweep: usize,
}

impl Inner {
    fn sweep(&mut self, now: Instant) -> usize {
        let before = self.values.len();
        self.values.retain(|_, entry| entry.is_live(now));
        self.writes_since_sweep = 0;
        before - self.values.len()
    }
}

/// In-memory store with per-key expiry
///
/// Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys, excluding sets
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let inner = self.inner.read().await;
        inner.values.values().filter(|e| e.is_live(now)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop expired entries
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let removed = self.inner.write().await.sweep(now);
        if removed > 0 {
            debug!(removed, "Purged expired in-memory entries");
        }
        removed
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let now = Instant::now();
        let inner = self.inner.read().await;
        Ok(inner
            .values
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), String> {
        let now = Instant::now();
        let mut inner = self.inner.write().await;
        inner.values.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| now + ttl),
            },
        );

        inner.writes_since_sweep += 1;
        if inner.writes_since_sweep >= SWEEP_EVERY_WRITES {
            let removed = inner.sweep(now);
            if removed > 0 {
                debug!(removed, "Swept expired in-memory entries");
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let now = Instant::now();
        let mut inner = self.inner.write().await;
        let removed = inner.values.remove(key);
        let removed_set = inner.sets.remove(key).is_some();
        Ok(removed.map_or(false, |entry| entry.is_live(now)) || removed_set)
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), String> {
        let mut inner = self.inner.write().await;
        inner
            .sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, String> {
        let inner = self.inner.read().await;
        Ok(inner
            .sets
            .get(key)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default())
    }
}
