//! Doctor input value objects: creation drafts and partial updates

use super::entities::{Coordinates, DoctorStatus, Location};
use serde::{Deserialize, Serialize};

/// Location fields as supplied by a form; every part is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationFields {
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl LocationFields {
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Build a complete location, coercing missing or non-finite
    /// coordinates to 0.
    pub fn into_location(self) -> Location {
        Location {
            address: self.address.unwrap_or_default(),
            coordinates: Coordinates {
                lat: finite_or(self.lat, 0.0),
                lng: finite_or(self.lng, 0.0),
            },
        }
    }

    /// Shallow merge onto an existing location: only supplied fields change.
    pub fn merge_onto(&self, current: &Location) -> Location {
        Location {
            address: self
                .address
                .clone()
                .unwrap_or_else(|| current.address.clone()),
            coordinates: Coordinates {
                lat: finite_or(self.lat, current.coordinates.lat),
                lng: finite_or(self.lng, current.coordinates.lng),
            },
        }
    }
}

fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(fallback)
}

/// Data for a new doctor. Id, rating and joined date are assigned on creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub status: Option<DoctorStatus>,
    pub image: String,
    pub location: Option<LocationFields>,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_status(mut self, status: DoctorStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_location(mut self, location: LocationFields) -> Self {
        self.location = Some(location);
        self
    }
}

/// Partial update of a doctor. `None` leaves a field untouched.
///
/// Rating and joined date are not part of a patch; they are never changed
/// through the roster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<DoctorStatus>,
    pub image: Option<String>,
    pub location: Option<LocationFields>,
}

impl DoctorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(status: DoctorStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn specialty(specialty: impl Into<String>) -> Self {
        Self {
            specialty: Some(specialty.into()),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_location(mut self, location: LocationFields) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_location_coerces_missing_coordinates() {
        let location = LocationFields::default()
            .with_address("12 Harley St")
            .into_location();
        assert_eq!(location.address, "12 Harley St");
        assert_eq!(location.coordinates, Coordinates::new(0.0, 0.0));
    }

    #[test]
    fn test_into_location_coerces_nan() {
        let fields = LocationFields {
            address: None,
            lat: Some(f64::NAN),
            lng: Some(2.35),
        };
        let location = fields.into_location();
        assert_eq!(location.coordinates.lat, 0.0);
        assert_eq!(location.coordinates.lng, 2.35);
    }

    #[test]
    fn test_merge_onto_only_latitude() {
        let current = Location::new("Paris", Coordinates::new(48.85, 2.35));
        let patch = LocationFields {
            lat: Some(45.76),
            ..Default::default()
        };
        let merged = patch.merge_onto(&current);
        assert_eq!(merged.address, "Paris");
        assert_eq!(merged.coordinates, Coordinates::new(45.76, 2.35));
    }

    #[test]
    fn test_merge_onto_ignores_non_finite() {
        let current = Location::new("Lyon", Coordinates::new(45.76, 4.83));
        let patch = LocationFields {
            lng: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(patch.merge_onto(&current), current);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(DoctorPatch::new().is_empty());
        assert!(!DoctorPatch::status(DoctorStatus::Suspended).is_empty());
    }
}
