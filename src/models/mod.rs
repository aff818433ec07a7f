//! JSON shapes returned by the catalog API
//!
//! Only the fields the client displays are modeled; serde ignores the rest.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{
    EncounterDetail, LocationArea, LocationAreaPage, PokemonEncounter, VersionEncounterDetail,
};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
