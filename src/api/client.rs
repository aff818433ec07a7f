//! Catalog API Client
//!
//! Fetches JSON resources over HTTP, keeping each successful response body
//! in the shared [`Cache`] under its request URL.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the catalog API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Arc<Cache>,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` that reads through `cache`.
    pub fn new(base_url: impl Into<String>, cache: Arc<Cache>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    // == URL Builders ==
    /// URL of one page of the location area listing.
    pub fn location_areas_url(&self, offset: u32, limit: u32) -> String {
        format!(
            "{}/location-area?offset={}&limit={}",
            self.base_url, offset, limit
        )
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the resource at `url`, from the cache when possible.
    ///
    /// On a miss the body is decoded before it is cached, so a response that
    /// does not parse as `T` is never stored.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url).await {
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!("Fetching {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;
        self.cache.add(url, body.to_vec()).await;

        Ok(value)
    }

    /// Fetches a page of location areas by its absolute URL.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch(url).await
    }

    /// Fetches a location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch(&self.location_area_url(name))
            .await
            .map_err(|err| not_found_as(err, || format!("location area '{}'", name)))
    }

    /// Fetches a Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.pokemon_url(name))
            .await
            .map_err(|err| not_found_as(err, || format!("pokemon '{}'", name)))
    }
}

/// Turns a 404 status into a `NotFound` naming the requested resource.
fn not_found_as(err: PokedexError, describe: impl FnOnce() -> String) -> PokedexError {
    match err {
        PokedexError::Status { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
            PokedexError::NotFound(describe())
        }
        other => other,
    }
}
