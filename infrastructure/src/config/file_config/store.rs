//! Store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which collection store adapter backs the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store; contents vanish on exit
    Memory,
    /// JSON snapshot on disk at `store.path`
    #[default]
    File,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::File => write!(f, "file"),
        }
    }
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Snapshot file for the `file` backend
    pub path: Option<PathBuf>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

/// `$XDG_DATA_HOME/doctor-roster/roster.json` (or the platform equivalent)
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("doctor-roster").join("roster.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_section_deserialize() {
        let toml_str = r#"
[store]
backend = "memory"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_default_backend_is_file() {
        assert_eq!(FileStoreConfig::default().backend, StoreBackend::File);
    }
}
