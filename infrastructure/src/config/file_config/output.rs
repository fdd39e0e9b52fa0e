//! `[output]` section: how roster-admin prints listings and the dashboard

use roster_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Printing preferences. `--output` and `--quiet` on the command line win
/// over these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `table` or `json`; unset prints tables
    pub format: Option<OutputFormat>,
    /// Colored tables and notices. JSON output is never colored.
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
