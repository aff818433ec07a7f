//! Cache Module
//!
//! Provides an in-memory byte cache whose entries expire a fixed interval
//! after insertion, swept by a background reaper.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
