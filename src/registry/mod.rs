//! Immutable in-memory company registry

pub mod loader;

// Re-export main functionality
pub use loader::{load_or_empty, JsonFileSource, RegistryData, RegistrySource};

use crate::matching::normalize;
use crate::types::{default_business_type, RegistryEntry};

/// The bilingual registry of already-registered company names.
///
/// Built once at startup and read-only thereafter: matching operations are
/// pure functions over this value, so it can be shared across concurrent
/// requests behind an `Arc` without locking. Normalized forms of both tracks
/// are precomputed here so every lookup skips per-entry case folding.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    normalized_fr: Vec<String>,
    normalized_ar: Vec<String>,
}

impl Registry {
    /// Build from explicit entries.
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        let normalized_fr = entries.iter().map(|e| normalize(&e.name_fr)).collect();
        let normalized_ar = entries.iter().map(|e| normalize(&e.name_ar)).collect();
        Self {
            entries,
            normalized_fr,
            normalized_ar,
        }
    }

    /// Build from the loader contract: two parallel name lists plus an
    /// optional per-entry business-type list.
    ///
    /// The lists are logically one registry of entries. A shorter track is
    /// padded with empty names (empty names never match); missing types
    /// default to `"SARL"`.
    pub fn from_tracks(
        names_fr: Vec<String>,
        names_ar: Vec<String>,
        types: Option<Vec<String>>,
    ) -> Self {
        let len = names_fr.len().max(names_ar.len());
        let types = types.unwrap_or_default();

        let entries = (0..len)
            .map(|i| RegistryEntry {
                name_fr: names_fr.get(i).cloned().unwrap_or_default(),
                name_ar: names_ar.get(i).cloned().unwrap_or_default(),
                business_type: types
                    .get(i)
                    .cloned()
                    .unwrap_or_else(default_business_type),
            })
            .collect();

        Self::new(entries)
    }

    /// Registry with no entries. Every lookup against it reports "available".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Normalized primary-language track, index-aligned with `entries()`.
    pub fn normalized_fr(&self) -> &[String] {
        &self.normalized_fr
    }

    /// Normalized secondary-language track, index-aligned with `entries()`.
    pub fn normalized_ar(&self) -> &[String] {
        &self.normalized_ar
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
