//! Cache Entry Module
//!
//! Defines a single stored payload stamped with its creation instant.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// An opaque payload plus the instant it was inserted.
///
/// Timestamps come from `tokio::time::Instant`, so a paused test runtime
/// controls how old an entry looks.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes; callers own (de)serialization
    pub payload: Vec<u8>,
    /// Insertion instant, never modified after creation
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self::created_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn created_at(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates at zero when `now` precedes the creation instant, which is
    /// what a sweep sees for entries inserted after it read the clock.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is still
    /// live; it expires once the age is strictly greater.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}
