//! Use cases
//!
//! Application-level operations that orchestrate domain logic over the
//! collection store.

pub mod doctor_repository;
pub mod load_dashboard;
pub(crate) mod shared;
pub mod specialty_directory;

#[cfg(test)]
pub(crate) mod test_support;
