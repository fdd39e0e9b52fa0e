//! Infrastructure layer for doctor-roster
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDashboardConfig, FileLoggingConfig,
    FileOutputConfig, FileStoreConfig, StoreBackend,
};
pub use logging::JsonlMutationLogger;
pub use store::{Collections, FileCollectionStore, InMemoryCollectionStore, connect};
