//! Floor-to-extension lookup table.
//!
//! A JSON object mapping human-readable floor names to extension numbers,
//! e.g. `{"3rd-floor": "5559999"}`. Loaded fresh on every request-handling
//! cycle so edits to the file take effect immediately; staleness is bounded
//! by one file read per page view.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the extension map.
#[derive(Error, Debug)]
pub enum ExtensionMapError {
    #[error("cannot read extension map {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid extension map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The floor-name to extension-number table.
///
/// Backed by a `BTreeMap` so the form dropdown renders in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMap {
    entries: BTreeMap<String, String>,
}

impl ExtensionMap {
    /// Read and parse the map file at `path`.
    pub fn load(path: &Path) -> Result<Self, ExtensionMapError> {
        let content = std::fs::read_to_string(path).map_err(|source| ExtensionMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a map from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ExtensionMapError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Extension number for `floor`, if the floor is known.
    pub fn resolve(&self, floor: &str) -> Option<&str> {
        self.entries.get(floor).map(String::as_str)
    }

    /// Floor names, in stable (sorted) order, for the form dropdown.
    pub fn floors(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_floor() {
        let map = ExtensionMap::from_json(r#"{"3rd-floor": "5559999"}"#).unwrap();
        assert_eq!(map.resolve("3rd-floor"), Some("5559999"));
    }

    #[test]
    fn test_resolve_unknown_floor() {
        let map = ExtensionMap::from_json(r#"{"3rd-floor": "5559999"}"#).unwrap();
        assert_eq!(map.resolve("4th-floor"), None);
    }

    #[test]
    fn test_floors_are_sorted() {
        let map = ExtensionMap::from_json(
            r#"{"lobby": "5550000", "2nd-floor": "5552222", "basement": "5551111"}"#,
        )
        .unwrap();
        assert_eq!(map.floors(), vec!["2nd-floor", "basement", "lobby"]);
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(matches!(
            ExtensionMap::from_json(r#"["not", "a", "map"]"#).unwrap_err(),
            ExtensionMapError::Parse(_)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExtensionMap::load(Path::new("/nonexistent/extension-mapping.json")).unwrap_err();
        assert!(matches!(err, ExtensionMapError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extension-mapping.json");
        std::fs::write(&path, r#"{"3rd-floor": "5559999"}"#).unwrap();
        let map = ExtensionMap::load(&path).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.resolve("3rd-floor"), Some("5559999"));
    }
}
