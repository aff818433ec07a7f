//! API Module
//!
//! Cache-first HTTP client for the catalog API.
//!
//! # Endpoints used
//! - `GET /location-area?offset=&limit=` - Paginated location areas
//! - `GET /location-area/{name}` - Pokemon encountered in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
