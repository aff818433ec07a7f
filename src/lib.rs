//! Pokedex - An interactive client for the Pokemon catalog API
//!
//! Pages through location areas, explores them, and catches and inspects
//! Pokemon. API responses are kept in a time-expiring cache swept by a
//! background reaper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
