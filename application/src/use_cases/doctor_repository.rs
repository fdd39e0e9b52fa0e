//! Doctor Repository
//!
//! CRUD over doctor documents. Every mutation that changes which specialty a
//! doctor belongs to also adjusts specialty counts through the
//! [`SpecialtyDirectory`].
//!
//! There are no multi-document transactions. A specialty change runs as two
//! phases, decrement the old name and then increment the new one, and a
//! failure in the second phase is returned without undoing the first. The
//! directory's create-on-increment and delete-at-one policies bring the count
//! back in line on the next mutation touching that name.

use crate::ports::collection_store::{DOCTORS_COLLECTION, StoreConnection, StoreError, set_all};
use crate::ports::mutation_logger::{MutationEvent, MutationLogger, NoMutationLogger};
use crate::use_cases::shared::{read_all, writable};
use crate::use_cases::specialty_directory::{DirectoryError, SpecialtyDirectory};
use chrono::Utc;
use roster_domain::{Doctor, DoctorFilter, DoctorPatch, DoctorStatus, NewDoctor, is_blank};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors returned by the doctor repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A specialty count phase failed; earlier writes of the same operation
    /// have already been applied.
    #[error("Specialty count update failed: {0}")]
    Directory(#[from] DirectoryError),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, RepositoryError::Store(StoreError::Unavailable(_)))
            || matches!(self, RepositoryError::Directory(e) if e.is_unavailable())
    }
}

/// Doctor CRUD with specialty count synchronization
pub struct DoctorRepository {
    connection: StoreConnection,
    specialties: Arc<SpecialtyDirectory>,
    logger: Arc<dyn MutationLogger>,
}

impl DoctorRepository {
    pub fn new(connection: StoreConnection, specialties: Arc<SpecialtyDirectory>) -> Self {
        Self {
            connection,
            specialties,
            logger: Arc::new(NoMutationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn MutationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Every doctor, with defaults filled in for missing fields.
    /// Read failures yield an empty list.
    pub async fn list_all(&self) -> Vec<Doctor> {
        let now = Utc::now();
        read_all(&self.connection, DOCTORS_COLLECTION)
            .await
            .iter()
            .map(|doc| Doctor::from_document(&doc.id, &doc.fields, now))
            .collect()
    }

    /// Doctors matching `filter`
    pub async fn list_filtered(&self, filter: &DoctorFilter) -> Vec<Doctor> {
        filter.apply(self.list_all().await)
    }

    /// One doctor by id
    pub async fn get(&self, id: &str) -> Result<Doctor, RepositoryError> {
        let store = writable(&self.connection, "fetch doctor")?;
        store
            .get_one(DOCTORS_COLLECTION, id)
            .await?
            .map(|doc| Doctor::from_document(&doc.id, &doc.fields, Utc::now()))
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    /// Create a doctor and count it against its specialty.
    ///
    /// The doctor document is written first; the specialty increment follows
    /// only when a non-blank specialty name was given. If the increment fails
    /// the doctor stays written and the error is returned.
    pub async fn add(&self, doctor: NewDoctor) -> Result<String, RepositoryError> {
        let store = writable(&self.connection, "add doctor")?;
        let id = store
            .create(DOCTORS_COLLECTION, None, doctor.to_document(Utc::now()))
            .await
            .inspect_err(|e| error!("Error adding doctor: {}", e))?;

        info!("Added new doctor with ID: {}", id);
        self.logger.log(MutationEvent::new(
            "doctor_added",
            json!({ "id": id, "name": doctor.name, "specialty": doctor.specialty }),
        ));

        if !is_blank(&doctor.specialty) {
            self.specialties
                .increment(&doctor.specialty)
                .await
                .inspect_err(|e| {
                    error!("Doctor {} added but specialty count not updated: {}", id, e)
                })?;
        }

        Ok(id)
    }

    /// Apply a partial update.
    ///
    /// When the patch names a specialty that differs (exact comparison) from
    /// the stored one, the old specialty is decremented (if non-blank) and then
    /// the new one incremented (if non-blank), before the doctor fields are
    /// written. A location patch is merged onto the stored location.
    pub async fn update(&self, id: &str, patch: DoctorPatch) -> Result<(), RepositoryError> {
        let store = writable(&self.connection, "update doctor")?;
        let Some(current) = store.get_one(DOCTORS_COLLECTION, id).await? else {
            error!("Doctor with ID {} not found for update.", id);
            return Err(RepositoryError::NotFound(id.to_string()));
        };

        let old_specialty = Doctor::specialty_of(&current.fields);
        if let Some(new_specialty) = &patch.specialty
            && *new_specialty != old_specialty
        {
            if !is_blank(&old_specialty) {
                self.specialties.decrement(&old_specialty).await?;
            }
            if !is_blank(new_specialty) {
                self.specialties.increment(new_specialty).await?;
            }
            info!(
                "Specialty changed from {:?} to {:?} for doctor {}",
                old_specialty, new_specialty, id
            );
        }

        let fields = patch.to_fields(&Doctor::location_of(&current.fields), Utc::now());
        store
            .update_fields(DOCTORS_COLLECTION, id, set_all(fields))
            .await
            .inspect_err(|e| error!("Error updating doctor {}: {}", id, e))?;

        info!("Updated doctor with ID: {}", id);
        self.logger.log(MutationEvent::new(
            "doctor_updated",
            json!({ "id": id, "patch": patch, "previousSpecialty": old_specialty }),
        ));
        Ok(())
    }

    /// Activate or suspend a doctor
    pub async fn set_status(&self, id: &str, status: DoctorStatus) -> Result<(), RepositoryError> {
        self.update(id, DoctorPatch::status(status)).await
    }

    /// Delete a doctor and release its specialty count.
    ///
    /// A missing id is logged and treated as already deleted.
    pub async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let store = writable(&self.connection, "delete doctor")?;
        let Some(current) = store.get_one(DOCTORS_COLLECTION, id).await? else {
            warn!("Attempted to delete non-existent doctor with ID: {}", id);
            return Ok(());
        };

        store
            .delete(DOCTORS_COLLECTION, id)
            .await
            .inspect_err(|e| error!("Error deleting doctor {}: {}", id, e))?;

        let specialty = Doctor::specialty_of(&current.fields);
        info!("Deleted doctor with ID: {}", id);
        self.logger.log(MutationEvent::new(
            "doctor_deleted",
            json!({ "id": id, "specialty": specialty }),
        ));

        if !is_blank(&specialty) {
            self.specialties.decrement(&specialty).await?;
        }
        Ok(())
    }
}
