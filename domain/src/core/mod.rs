//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — case-insensitive name matching and display helpers

pub mod error;
pub mod string;
