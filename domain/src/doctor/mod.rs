//! Doctor domain.
//!
//! - [`entities::Doctor`] — a doctor on the roster
//! - [`value_objects::NewDoctor`] / [`value_objects::DoctorPatch`] — create and update inputs
//! - [`filter::DoctorFilter`] — list search and filtering
//! - [`document`] — mapping to and from store documents

pub mod document;
pub mod entities;
pub mod filter;
pub mod value_objects;
