//! Caught Pokemon registry
//!
//! Owned by a single session; no locking or expiry.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A Pokemon the user has caught, with the moment it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name, iterated alphabetically.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch under `name`, replacing an earlier catch of the same name.
    pub fn insert(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.insert_at(name, pokemon, Utc::now());
    }

    pub fn insert_at(&mut self, name: impl Into<String>, pokemon: Pokemon, caught_at: DateTime<Utc>) {
        self.caught
            .insert(name.into(), CaughtPokemon { pokemon, caught_at });
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CaughtPokemon)> {
        self.caught.iter().map(|(name, caught)| (name.as_str(), caught))
    }
}
