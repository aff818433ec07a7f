//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these cover the network, decoding and command layers around it.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be completed
    #[error("failed to fetch data: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The API has no resource with this name
    #[error("{0} not found")]
    NotFound(String),

    /// The response body was not the expected JSON
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was entered without its required argument
    #[error("you must specify a {argument} to {command}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// The first word of the input names no command
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
