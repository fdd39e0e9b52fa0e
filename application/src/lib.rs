//! Application layer for doctor-roster
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use ports::{
    collection_store::{
        CollectionStore, DOCTORS_COLLECTION, Document, FieldUpdate, SPECIALTY_COLLECTION,
        StoreConnection, StoreError,
    },
    mutation_logger::{MutationEvent, MutationLogger, NoMutationLogger},
};
pub use use_cases::doctor_repository::{DoctorRepository, RepositoryError};
pub use use_cases::load_dashboard::{DashboardSummary, LoadDashboardUseCase};
pub use use_cases::specialty_directory::{DirectoryError, SpecialtyDirectory};
