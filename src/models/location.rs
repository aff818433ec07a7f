//! Location area DTOs
//!
//! Shapes of `GET /location-area` (paginated list) and
//! `GET /location-area/{name}` (single area with its encounters).

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of the location area listing.
///
/// `next`/`previous` are absolute URLs, or `null` at either end of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// A single location area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of every Pokemon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

/// Encounter data for one game version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedResource,
    #[serde(default)]
    pub encounter_details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EncounterDetail {
    pub min_level: u32,
    pub max_level: u32,
}
