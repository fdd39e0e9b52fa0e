//! Configuration file loading for doctor-roster
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROSTER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./roster.toml` or `./.roster.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/doctor-roster/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDashboardConfig, FileLoggingConfig, FileOutputConfig,
    FileStoreConfig, MAX_REGISTRATION_MONTHS, StoreBackend, default_store_path,
};
pub use loader::ConfigLoader;
