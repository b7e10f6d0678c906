use crate::creature::Creature;
use crate::errors::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Species roster compiled into the binary. Holds the 20 wild species
/// and the 3 starters of the demo application.
const BUNDLED_SPECIES: &str = include_str!("../data/species.ron");

/// One species record from the catalog: the stats a wild encounter or a
/// capture needs, plus display metadata (sprite reference, flavor text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub pokedex_number: u16,
    pub name: String,
    pub attack: u16,
    pub sprite_url: String,
    pub description: String,
}

impl SpeciesData {
    /// Create a full-health creature of this species. The battle engine
    /// treats the attack stat as an opaque input.
    pub fn instantiate(&self) -> Creature {
        Creature::new(self.name.clone(), self.attack)
    }
}

/// Catalog-data provider: species records keyed case-insensitively by name.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_name: HashMap<String, SpeciesData>,
}

impl Catalog {
    /// Load the catalog bundled into the binary.
    pub fn load_bundled() -> CatalogResult<Self> {
        Self::from_ron(BUNDLED_SPECIES)
    }

    /// Load a catalog from an external RON file.
    pub fn load_from_file(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::DataUnavailable(format!("{}: {}", path.display(), e))
        })?;
        Self::from_ron(&content)
    }

    fn from_ron(content: &str) -> CatalogResult<Self> {
        let records: Vec<SpeciesData> =
            ron::from_str(content).map_err(|e| CatalogError::MalformedData(e.to_string()))?;

        let mut by_name = HashMap::new();
        for species in records {
            by_name.insert(species.name.to_uppercase(), species);
        }
        Ok(Catalog { by_name })
    }

    /// Look up a species by name, case-insensitively.
    pub fn get(&self, name: &str) -> CatalogResult<&SpeciesData> {
        self.by_name
            .get(&name.to_uppercase())
            .ok_or_else(|| CatalogError::SpeciesNotFound(name.to_string()))
    }

    /// All species records, sorted by pokedex number.
    pub fn all(&self) -> Vec<&SpeciesData> {
        let mut records: Vec<&SpeciesData> = self.by_name.values().collect();
        records.sort_by_key(|s| s.pokedex_number);
        records
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
