//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rolling diagnostic log files; stderr only when unset
    pub directory: Option<PathBuf>,
    /// JSONL audit trail of roster mutations; disabled when unset
    pub audit_log: Option<PathBuf>,
}
