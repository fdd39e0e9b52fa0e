//! Doctor domain entities

use crate::core::error::DomainError;
use crate::core::string::is_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a doctor currently practices through the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    #[default]
    Active,
    Suspended,
}

impl DoctorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Active => "active",
            DoctorStatus::Suspended => "suspended",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DoctorStatus::Active)
    }
}

impl std::fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DoctorStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(DoctorStatus::Active),
            "suspended" => Ok(DoctorStatus::Suspended),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Latitude/longitude pair (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Practice location of a doctor (Value Object)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(address: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            address: address.into(),
            coordinates,
        }
    }
}

/// A doctor on the roster (Entity)
///
/// `specialty` holds a specialty *name*, matched case-insensitively against
/// specialty documents; it is not an id reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub status: DoctorStatus,
    pub rating: f64,
    pub image: String,
    pub joined_date: DateTime<Utc>,
    pub location: Location,
}

impl Doctor {
    /// Whether this doctor names any specialty at all
    pub fn has_specialty(&self) -> bool {
        !is_blank(&self.specialty)
    }
}
