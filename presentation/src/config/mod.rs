//! Presentation-level configuration
//!
//! Resolves how output is rendered from the config file and CLI flags.

use roster_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Hide success notifications
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
            quiet: false,
        }
    }
}

impl OutputConfig {
    /// A CLI format wins over the file setting; JSON output is never colored.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format.or(file_format).unwrap_or_default();
        Self {
            format,
            color: color && format == OutputFormat::Table,
            quiet,
        }
    }

    /// Turn terminal colors on or off for this process
    pub fn apply_color(&self) {
        colored::control::set_override(self.color);
    }
}
