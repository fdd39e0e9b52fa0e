//! Mapping between specialty entities and raw store document fields.

use super::entities::{
    DEFAULT_SPECIALTY_NAME, NewSpecialty, Specialty, SpecialtyPatch, UNKNOWN_SPECIALTY_NAME,
};
use crate::core::string::names_match;
use crate::doctor::document::timestamp;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

/// Field names used in specialty documents.
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const DOCTOR_COUNT: &str = "doctorCount";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
}

impl Specialty {
    /// Decode a stored document for display.
    ///
    /// The name is trimmed and a blank name reads as "Unknown Specialty".
    /// Missing, negative or non-numeric counts read as 0.
    pub fn from_document(id: &str, data: &Map<String, Value>) -> Self {
        let name = data
            .get(fields::NAME)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_SPECIALTY_NAME)
            .to_string();

        Self {
            id: id.to_string(),
            name,
            description: data
                .get(fields::DESCRIPTION)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            doctor_count: stored_count(data).map_or(0, |c| c.max(0.0) as u64),
        }
    }

    /// Whether the stored (untrimmed) name of a raw document matches `name`
    /// case-insensitively. Documents without a string name never match.
    pub fn document_named(data: &Map<String, Value>, name: &str) -> bool {
        data.get(fields::NAME)
            .and_then(Value::as_str)
            .is_some_and(|stored| names_match(stored, name))
    }

    /// Document for a specialty implicitly created for its first doctor.
    pub fn first_use_document(name: &str, now: DateTime<Utc>) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(fields::NAME.into(), json!(name));
        data.insert(fields::DOCTOR_COUNT.into(), json!(1));
        data.insert(fields::DESCRIPTION.into(), json!(""));
        data.insert(fields::CREATED_AT.into(), json!(timestamp(now)));
        data
    }
}

/// The raw `doctorCount` of a stored document, if it is a number.
pub fn stored_count(data: &Map<String, Value>) -> Option<f64> {
    data.get(fields::DOCTOR_COUNT)
        .and_then(Value::as_f64)
        .filter(|c| c.is_finite())
}

impl NewSpecialty {
    /// Document for an explicitly added specialty; the count starts at 0.
    pub fn to_document(&self, now: DateTime<Utc>) -> Map<String, Value> {
        let name = if self.name.trim().is_empty() {
            DEFAULT_SPECIALTY_NAME
        } else {
            self.name.as_str()
        };

        let mut data = Map::new();
        data.insert(fields::NAME.into(), json!(name));
        data.insert(fields::DESCRIPTION.into(), json!(self.description));
        data.insert(fields::DOCTOR_COUNT.into(), json!(0));
        data.insert(fields::CREATED_AT.into(), json!(timestamp(now)));
        data
    }
}

impl SpecialtyPatch {
    /// Top-level fields to write for this patch, always including `updatedAt`.
    pub fn to_fields(&self, now: DateTime<Utc>) -> Map<String, Value> {
        let mut data = Map::new();
        if let Some(name) = &self.name {
            data.insert(fields::NAME.into(), json!(name));
        }
        if let Some(description) = &self.description {
            data.insert(fields::DESCRIPTION.into(), json!(description));
        }
        if let Some(count) = self.doctor_count {
            data.insert(fields::DOCTOR_COUNT.into(), json!(count));
        }
        data.insert(fields::UPDATED_AT.into(), json!(timestamp(now)));
        data
    }
}
