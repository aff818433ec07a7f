//! Cache Store Module
//!
//! The unsynchronized map behind [`Cache`](crate::cache::Cache). Every method
//! takes `&mut self`; the owning handle serializes access with one lock.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Keyed byte payloads that expire a fixed interval after insertion.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Fixed lifetime of every entry
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    ///
    /// # Arguments
    /// * `ttl` - Fixed lifetime of every entry; an entry expires once its age exceeds it
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    /// Returns the fixed entry lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Add ==
    /// Stores `payload` under `key`, stamped with the current instant.
    ///
    /// An existing entry is replaced whole, payload and timestamp together.
    pub fn add(&mut self, key: String, payload: Vec<u8>) {
        self.insert_entry(key, CacheEntry::new(payload));
    }

    /// Stores a prepared entry under `key`.
    pub fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// An entry older than the ttl is removed and reported as a miss even
    /// if the reaper has not swept it yet.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        self.get_at(key, Instant::now())
    }

    /// Same as [`get`](Self::get), judging expiry as of `now`.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<Vec<u8>> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl, now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expired(1);
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.payload.clone())
    }

    // == Reap Expired ==
    /// Removes every entry that has outlived the ttl as of `now`.
    ///
    /// # Arguments
    /// * `now` - The sweep's clock; entries stamped after it are always kept
    ///
    /// # Returns
    /// The number of entries removed.
    pub fn reap_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of stored entries, including any not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present, without judging expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
