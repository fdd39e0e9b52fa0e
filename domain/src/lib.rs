//! Domain layer for doctor-roster
//!
//! This crate contains the core entities, value objects and pure computations.
//! It has no dependencies on storage, infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Doctors and specialties
//!
//! - **Doctor**: a roster entry that names its specialty by *name*, not by id
//! - **Specialty**: a named specialty carrying a denormalized `doctorCount`
//!
//! Specialty names match case-insensitively. Keeping each `doctorCount` in step
//! with the doctors that name it is the job of the application layer.
//!
//! ## Documents
//!
//! Entities are persisted as loosely-typed JSON documents. The `document`
//! modules decode them defensively so that missing fields never reach the
//! presentation layer.

pub mod config;
pub mod core;
pub mod dashboard;
pub mod doctor;
pub mod specialty;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    string::{contains_ignore_case, is_blank, names_match, truncate},
};
pub use dashboard::stats::{
    DashboardStats, MonthlyRegistrations, registrations_by_month, top_specialties,
};
pub use doctor::{
    document::timestamp,
    entities::{Coordinates, Doctor, DoctorStatus, Location},
    filter::{DoctorFilter, distinct_specialties},
    value_objects::{DoctorPatch, LocationFields, NewDoctor},
};
pub use specialty::{
    entities::{
        DEFAULT_SPECIALTY_NAME, NewSpecialty, Specialty, SpecialtyName, SpecialtyPatch,
        UNKNOWN_SPECIALTY_NAME,
    },
    filter::SpecialtyFilter,
};
