//! Specialty domain.
//!
//! - [`entities::Specialty`] — a specialty with its denormalized doctor count
//! - [`entities::SpecialtyName`] — a non-blank name used for lookups
//! - [`filter::SpecialtyFilter`] — list search
//! - [`document`] — mapping to and from store documents

pub mod document;
pub mod entities;
pub mod filter;
