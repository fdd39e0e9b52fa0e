//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout section by section and are
//! deserialized directly, using domain types where one exists.

mod dashboard;
mod logging;
mod output;
mod store;

pub use dashboard::FileDashboardConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use store::{FileStoreConfig, StoreBackend, default_store_path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on `dashboard.registration_months`
pub const MAX_REGISTRATION_MONTHS: u32 = 120;

/// Problems detected in a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("dashboard.top_specialties must be at least 1")]
    NoTopSpecialties,

    #[error("dashboard.registration_months must be between 1 and {max}, got {value}")]
    RegistrationMonthsOutOfRange { value: u32, max: u32 },

    #[error("store.backend = \"file\" requires store.path")]
    MissingStorePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Store backend selection
    pub store: FileStoreConfig,
    /// Dashboard shaping
    pub dashboard: FileDashboardConfig,
    /// Diagnostic and audit log destinations
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected issue.
    ///
    /// A missing store path is reported but not fatal: the store connection
    /// degrades to unavailable instead.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.dashboard.top_specialties == 0 {
            issues.push(ConfigValidationError::NoTopSpecialties);
        }

        let months = self.dashboard.registration_months;
        if months == 0 || months > MAX_REGISTRATION_MONTHS {
            issues.push(ConfigValidationError::RegistrationMonthsOutOfRange {
                value: months,
                max: MAX_REGISTRATION_MONTHS,
            });
        }

        if self.store.backend == StoreBackend::File && self.store.path.is_none() {
            issues.push(ConfigValidationError::MissingStorePath);
        }

        issues
    }
}
