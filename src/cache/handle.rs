//! Cache Handle Module
//!
//! The thread-safe cache callers hold: one lock around a [`CacheStore`]
//! plus the reaper that sweeps it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache ==
/// A time-expiring map from string keys to byte payloads.
///
/// All reads, writes and sweeps go through a single exclusive lock. Share a
/// `Cache` between tasks with `Arc<Cache>`; the reaper lives exactly as long
/// as the `Cache` value (or until [`shutdown`](Self::shutdown)).
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    reaper: ReaperHandle,
    ttl: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache whose entries expire after `ttl`, and starts
    /// a reaper that sweeps once per `ttl`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper(store.clone(), ttl);

        Self { store, reaper, ttl }
    }

    /// Returns the fixed entry lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Add ==
    /// Stores `payload` under `key`, replacing any previous entry.
    pub async fn add(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let key = key.into();
        debug!("Cache add: {}", key);
        self.store.lock().await.add(key, payload.into());
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` if it is absent or
    /// has outlived the ttl.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = self.store.lock().await.get(key);
        match payload {
            Some(_) => debug!("Cache hit: {}", key),
            None => debug!("Cache miss: {}", key),
        }
        payload
    }

    /// Returns the number of stored entries, including any not yet reaped.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit, consuming the cache.
    pub async fn shutdown(self) {
        self.reaper.stop().await;
        debug!("Cache shut down");
    }
}
