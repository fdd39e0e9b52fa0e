//! Mapping between doctor entities and raw store document fields.
//!
//! Decoding is defensive: every field the roster renders gets a default when
//! the stored document is missing it or holds the wrong type.

use super::entities::{Coordinates, Doctor, DoctorStatus, Location};
use super::value_objects::{DoctorPatch, NewDoctor};
use crate::core::string::is_blank;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};

/// Field names used in doctor documents.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SPECIALTY: &str = "specialty";
    pub const STATUS: &str = "status";
    pub const RATING: &str = "rating";
    pub const IMAGE: &str = "image";
    pub const JOINED_DATE: &str = "joinedDate";
    pub const LOCATION: &str = "location";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
}

/// RFC 3339 timestamp with millisecond precision, as stored in documents.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn str_field(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn num_field(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn location_to_value(location: &Location) -> Value {
    json!({
        "address": location.address,
        "coordinates": {
            "lat": location.coordinates.lat,
            "lng": location.coordinates.lng,
        }
    })
}

fn location_from_value(value: Option<&Value>) -> Location {
    let Some(value) = value else {
        return Location::default();
    };
    let coordinates = value.get("coordinates");
    Location {
        address: value
            .get("address")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        coordinates: Coordinates {
            lat: num_field(coordinates.and_then(|c| c.get("lat"))),
            lng: num_field(coordinates.and_then(|c| c.get("lng"))),
        },
    }
}

impl Doctor {
    /// Decode a stored document, defaulting anything missing.
    ///
    /// `now` stands in for an absent or unreadable `joinedDate`.
    pub fn from_document(id: &str, data: &Map<String, Value>, now: DateTime<Utc>) -> Self {
        let status = data
            .get(fields::STATUS)
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<DoctorStatus>().ok())
            .unwrap_or_default();

        let joined_date = data
            .get(fields::JOINED_DATE)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or(now);

        Self {
            id: id.to_string(),
            name: str_field(data, fields::NAME),
            email: str_field(data, fields::EMAIL),
            phone: str_field(data, fields::PHONE),
            specialty: str_field(data, fields::SPECIALTY),
            status,
            rating: num_field(data.get(fields::RATING)),
            image: str_field(data, fields::IMAGE),
            joined_date,
            location: location_from_value(data.get(fields::LOCATION)),
        }
    }

    /// The stored location of a raw document, for shallow merges on update.
    pub fn location_of(data: &Map<String, Value>) -> Location {
        location_from_value(data.get(fields::LOCATION))
    }

    /// The stored specialty name of a raw document (empty when absent).
    pub fn specialty_of(data: &Map<String, Value>) -> String {
        str_field(data, fields::SPECIALTY)
    }
}

impl NewDoctor {
    /// Build the full document for a new doctor.
    ///
    /// Status defaults to active, rating starts at 0 and both `joinedDate`
    /// and `createdAt` are set to `now`.
    pub fn to_document(&self, now: DateTime<Utc>) -> Map<String, Value> {
        let location = self.location.clone().unwrap_or_default().into_location();
        let stamp = timestamp(now);

        let mut data = Map::new();
        data.insert(fields::NAME.into(), json!(self.name));
        data.insert(fields::EMAIL.into(), json!(self.email));
        data.insert(fields::PHONE.into(), json!(self.phone));
        data.insert(
            fields::SPECIALTY.into(),
            json!(stored_specialty(&self.specialty)),
        );
        data.insert(
            fields::STATUS.into(),
            json!(self.status.unwrap_or_default().as_str()),
        );
        data.insert(fields::RATING.into(), json!(0));
        data.insert(fields::IMAGE.into(), json!(self.image));
        data.insert(fields::JOINED_DATE.into(), json!(stamp));
        data.insert(fields::LOCATION.into(), location_to_value(&location));
        data.insert(fields::CREATED_AT.into(), json!(stamp));
        data
    }
}

impl DoctorPatch {
    /// Top-level fields to write for this patch.
    ///
    /// A supplied location is merged onto `current_location` so that untouched
    /// sub-fields survive. `updatedAt` is always included.
    pub fn to_fields(&self, current_location: &Location, now: DateTime<Utc>) -> Map<String, Value> {
        let mut data = Map::new();
        let strings = [
            (fields::NAME, &self.name),
            (fields::EMAIL, &self.email),
            (fields::PHONE, &self.phone),
            (fields::IMAGE, &self.image),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                data.insert(key.into(), json!(value));
            }
        }
        if let Some(specialty) = &self.specialty {
            data.insert(fields::SPECIALTY.into(), json!(stored_specialty(specialty)));
        }
        if let Some(status) = self.status {
            data.insert(fields::STATUS.into(), json!(status.as_str()));
        }
        if let Some(location) = &self.location {
            let merged = location.merge_onto(current_location);
            data.insert(fields::LOCATION.into(), location_to_value(&merged));
        }
        data.insert(fields::UPDATED_AT.into(), json!(timestamp(now)));
        data
    }
}

/// A blank specialty name is stored as `""`.
fn stored_specialty(name: &str) -> &str {
    if is_blank(name) { "" } else { name }
}
