//! Registry loading from an external data source
//!
//! The loader contract is deliberately narrow: a source produces two parallel
//! name lists and an optional type list, or an explicit error. The registry
//! is loaded once per process; nothing re-reads or watches the source at
//! runtime.

use crate::error::{NomGuardError, Result};
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw registry payload as produced by a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryData {
    pub names_fr: Vec<String>,
    pub names_ar: Vec<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
}

/// A place registry data can be loaded from.
pub trait RegistrySource {
    fn load(&self) -> Result<RegistryData>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// JSON file source: `{"names_fr": [...], "names_ar": [...], "types": [...]}`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RegistrySource for JsonFileSource {
    fn load(&self) -> Result<RegistryData> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            NomGuardError::registry(e.to_string(), Some(self.path.display().to_string()))
        })?;
        let data: RegistryData = serde_json::from_str(&raw).map_err(|e| {
            NomGuardError::registry(
                format!("invalid registry file: {}", e),
                Some(self.path.display().to_string()),
            )
        })?;
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load the registry, failing open to an empty one.
///
/// A missing or malformed source is not fatal: the matcher then reports every
/// name as available. The warning below is the signal a deployment must alarm
/// on, since silent fail-open makes every name look free.
pub fn load_or_empty(source: &dyn RegistrySource) -> Registry {
    match source.load() {
        Ok(data) => {
            let registry = Registry::from_tracks(data.names_fr, data.names_ar, data.types);
            tracing::info!(
                source = %source.describe(),
                entries = registry.len(),
                "company registry loaded"
            );
            registry
        }
        Err(e) => {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "registry unavailable, every name will look available"
            );
            Registry::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_source_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"names_fr": ["NovaTech", "Atlas"], "names_ar": ["نوفاتك", "أطلس"], "types": ["SA", "SARL"]}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let registry = load_or_empty(&source);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].name_fr, "NovaTech");
        assert_eq!(registry.entries()[1].business_type, "SARL");
    }

    #[test]
    fn test_types_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"names_fr": ["Atlas"], "names_ar": ["أطلس"]}}"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let data = source.load().unwrap();
        assert!(data.types.is_none());
    }

    #[test]
    fn test_missing_file_fails_open() {
        let source = JsonFileSource::new("/nonexistent/cc.json");
        assert!(source.load().is_err());

        let registry = load_or_empty(&source);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_malformed_file_fails_open() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let source = JsonFileSource::new(file.path());
        let registry = load_or_empty(&source);
        assert!(registry.is_empty());
    }
}
