//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_CACHE_TTL: u64 = 10;
/// One year; longer lifetimes are capped to this.
const MAX_CACHE_TTL: u64 = 365 * 24 * 60 * 60;
const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of cached API responses in seconds (also the reaper period)
    pub cache_ttl: u64,
    /// Root of the catalog API, without a trailing slash
    pub api_base_url: String,
    /// Number of location areas fetched per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache entry lifetime in seconds (default: 10, max: one year)
    /// - `API_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable lookup, applying the same parsing
    /// and defaults as [`from_env`](Self::from_env).
    ///
    /// Zero or unparsable numbers fall back to their defaults. `CACHE_TTL` is
    /// capped at one year.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cache_ttl: lookup("CACHE_TTL")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ttl| *ttl > 0)
                .map(|ttl| ttl.min(MAX_CACHE_TTL))
                .unwrap_or(DEFAULT_CACHE_TTL),
            api_base_url: lookup("API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            page_size: lookup("PAGE_SIZE")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Returns the cache ttl as a Duration.
    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
