//! FHEVM Catalog - The table of named examples
//!
//! The catalog is an ordered, read-only list of [`ExampleEntry`] records keyed
//! by string. Insertion order is the display order everywhere: listings,
//! category groups, related-entry picks. Build it once and hand it around by
//! reference.

mod builtin;
mod entry;
mod error;

pub use entry::*;
pub use error::CatalogError;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Ordered collection of examples
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ExampleEntry>,
}

impl Catalog {
    /// The examples shipped with this repository
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
        }
    }

    /// Build a catalog from entries, rejecting duplicate keys
    pub fn from_entries(entries: Vec<ExampleEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON array of entries
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<ExampleEntry> =
            serde_json::from_str(&text).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_entries(entries)
    }

    pub fn get(&self, key: &str) -> Option<&ExampleEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Look up a key, failing with the full list of valid keys
    pub fn resolve(&self, key: &str) -> Result<&ExampleEntry, CatalogError> {
        self.get(key).ok_or_else(|| CatalogError::UnknownExample {
            key: key.to_string(),
            available: self.keys().map(str::to_string).collect(),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExampleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by category.
    ///
    /// Groups appear in the order their first entry appears; entries keep
    /// catalog order inside each group.
    pub fn by_category(&self) -> Vec<(&str, Vec<&ExampleEntry>)> {
        let mut groups: Vec<(&str, Vec<&ExampleEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(cat, _)| *cat == entry.category) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.category.as_str(), vec![entry])),
            }
        }
        groups
    }

    /// Up to `limit` other entries sharing `key`'s category
    pub fn related(&self, key: &str, limit: usize) -> Vec<&ExampleEntry> {
        let Some(entry) = self.get(key) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| e.category == entry.category && e.key != key)
            .take(limit)
            .collect()
    }
}
