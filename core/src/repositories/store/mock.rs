//! Mock implementation of KeyValueStore for testing

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use super::trait_::KeyValueStore;

/// In-memory store honouring expiry against tokio's clock, with failure switches
#[derive(Default)]
pub struct MockKeyValueStore {
    entries: Mutex<HashMap<String, (String, Option<Instant>)>>,
    sets: Mutex<HashMap<String, HashSet<String>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Write a raw value, bypassing failure switches
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), None));
    }

    /// Add a raw set member, bypassing failure switches
    pub fn insert_member(&self, key: &str, member: &str) {
        self.sets
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
    }

    /// Remaining lifetime of a key, if it has one and is still live
    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.lock().unwrap();
        let (_, expires_at) = entries.get(key)?;
        let expires_at = (*expires_at)?;
        expires_at.checked_duration_since(Instant::now())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.live_value(key).is_some()
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((_, Some(expires_at))) if *expires_at <= Instant::now() => None,
            Some((value, _)) => Some(value.clone()),
            None => None,
        }
    }
}

#[async_trait]
impl KeyValueStore for MockKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err("Mock store read error".to_string());
        }
        Ok(self.live_value(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err("Mock store write error".to_string());
        }
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err("Mock store delete error".to_string());
        }
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn set_add(&self, key: &str, member: &str) -> Result<(), String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err("Mock store write error".to_string());
        }
        self.insert_member(key, member);
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, String> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err("Mock store read error".to_string());
        }
        Ok(self
            .sets
            .lock()
            .unwrap()
            .get(key)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default())
    }
}
