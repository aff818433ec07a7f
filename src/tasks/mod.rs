//! Background Tasks Module
//!
//! Contains background tasks that run alongside the cache's callers.
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per ttl

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
