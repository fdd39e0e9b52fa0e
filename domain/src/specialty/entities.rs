//! Specialty domain entities

use crate::core::error::DomainError;
use crate::core::string::names_match;
use serde::{Deserialize, Serialize};

/// Name shown for a stored specialty whose name is blank.
pub const UNKNOWN_SPECIALTY_NAME: &str = "Unknown Specialty";

/// Name given to an explicitly added specialty submitted without one.
pub const DEFAULT_SPECIALTY_NAME: &str = "New Specialty";

/// A medical specialty (Entity)
///
/// `doctor_count` is denormalized: it tracks how many doctors name this
/// specialty and is kept in step by the specialty directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    pub id: String,
    pub name: String,
    pub description: String,
    pub doctor_count: u64,
}

impl Specialty {
    /// Case-insensitive comparison against a specialty name
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Validated, non-blank specialty name used for lookups (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialtyName(String);

impl SpecialtyName {
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            Err(DomainError::EmptySpecialtyName)
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SpecialtyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data for an explicitly added specialty
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewSpecialty {
    pub name: String,
    pub description: String,
}

impl NewSpecialty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update of a specialty.
///
/// `doctor_count` exists for manual administrative correction only; normal
/// doctor mutations adjust the count through the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecialtyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub doctor_count: Option<u64>,
}

impl SpecialtyPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_doctor_count(mut self, count: u64) -> Self {
        self.doctor_count = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
