//! Pokedex - An interactive client for the Pokemon catalog API
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (stderr)
//! 2. Load configuration from environment variables
//! 3. Create the response cache, which starts its reaper
//! 4. Build the API client and REPL session
//! 5. Run the REPL over stdin/stdout until `exit` or end of input
//! 6. Shut the cache down and log its statistics

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeApiClient, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the prompt.
    // Defaults to "warn", can be overridden with RUST_LOG env var.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, api_base_url={}, page_size={}",
        config.cache_ttl, config.api_base_url, config.page_size
    );

    let cache = Arc::new(Cache::new(config.cache_ttl_duration()));
    info!("Response cache initialized");

    let client = PokeApiClient::new(config.api_base_url.clone(), cache.clone());
    let mut session = Session::new(client, config.page_size);

    let mut stdout = io::stdout();
    repl::run(&mut session, BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
        .context("REPL terminated on an I/O error")?;

    // The session's client holds the other reference to the cache.
    drop(session);

    let stats = cache.stats().await;
    info!(
        "Cache statistics: hits={}, misses={}, expired={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.expired,
        stats.total_entries,
        stats.hit_rate()
    );

    match Arc::try_unwrap(cache) {
        Ok(cache) => cache.shutdown().await,
        Err(_) => warn!("Cache still shared at exit; reaper stops when the runtime ends"),
    }

    info!("Pokedex closed");
    Ok(())
}
