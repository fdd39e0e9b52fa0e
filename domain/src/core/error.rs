//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid doctor status: {0} (expected \"active\" or \"suspended\")")]
    InvalidStatus(String),

    #[error("Specialty name cannot be empty")]
    EmptySpecialtyName,

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

impl DomainError {
    /// Check if this error was caused by a blank specialty name
    pub fn is_empty_name(&self) -> bool {
        matches!(self, DomainError::EmptySpecialtyName)
    }
}
