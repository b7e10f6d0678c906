use crate::catalog::Catalog;
use crate::creature::Creature;
use crate::errors::{CatalogError, CollectionError, CollectionResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names of the creatures every new collection starts with.
const STARTER_SPECIES: [&str; 3] = ["Blastoise", "Charizard", "Ivysaur"];

/// The captured-creature collection.
///
/// An owned repository object, passed explicitly to whichever component
/// reads or appends to it. Release is refused while only one creature
/// remains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    creatures: Vec<Creature>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    /// A collection seeded with the three starter creatures.
    pub fn with_starters(catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut collection = Collection::new();
        for name in STARTER_SPECIES {
            collection.add(catalog.get(name)?.instantiate());
        }
        Ok(collection)
    }

    /// Append a captured creature. Duplicates are allowed; the original
    /// keeps every capture as its own record.
    pub fn add(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Release the first creature matching `name` (case-insensitive).
    /// The last remaining creature can never be released.
    pub fn release(&mut self, name: &str) -> CollectionResult<Creature> {
        if self.creatures.len() <= 1 {
            return Err(CollectionError::LastCreature);
        }
        let index = self
            .creatures
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CollectionError::NotFound(name.to_string()))?;
        Ok(self.creatures.remove(index))
    }

    /// Case-insensitive substring filter over creature names.
    pub fn search(&self, query: &str) -> Vec<&Creature> {
        let query = query.to_lowercase();
        self.creatures
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Persist the collection as JSON.
    pub fn save_to_file(&self, path: &Path) -> CollectionResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CollectionError::MalformedData(e.to_string()))?;
        fs::write(path, json).map_err(|e| {
            CollectionError::StorageUnavailable(format!("{}: {}", path.display(), e))
        })
    }

    /// Load a collection previously written by [`Collection::save_to_file`].
    pub fn load_from_file(path: &Path) -> CollectionResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            CollectionError::StorageUnavailable(format!("{}: {}", path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| CollectionError::MalformedData(e.to_string()))
    }
}
