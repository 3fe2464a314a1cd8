//! Floor-to-extension mapping configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the optional floor-to-extension lookup.
///
/// When enabled, the form offers a dropdown of floor names instead of a free
/// destination field, and submissions are resolved through the JSON map. The
/// file is re-read on every page view so edits take effect without a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("extension-mapping.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_config_defaults() {
        let config = MappingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.path, PathBuf::from("extension-mapping.json"));
    }
}
