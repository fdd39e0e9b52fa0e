//! Specialty Directory
//!
//! Resolves specialty names to specialty documents and owns the
//! denormalized `doctorCount` on each of them.
//!
//! Lookups scan the whole `specialty` collection and compare names
//! case-insensitively on the client.
//!
//! Counts change only through [`SpecialtyDirectory::increment`] and
//! [`SpecialtyDirectory::decrement`] (plus manual correction through
//! [`SpecialtyDirectory::update`]). A decrement that would bring a count to
//! zero deletes the specialty instead, and an increment of an unknown name
//! creates it.

use crate::ports::collection_store::{
    Document, FieldUpdate, SPECIALTY_COLLECTION, StoreConnection, StoreError, set_all,
};
use crate::ports::mutation_logger::{MutationEvent, MutationLogger, NoMutationLogger};
use crate::use_cases::shared::{read_all, writable};
use chrono::Utc;
use roster_domain::specialty::document::{fields, stored_count};
use roster_domain::{DomainError, NewSpecialty, Specialty, SpecialtyName, SpecialtyPatch};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors returned by the specialty directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Specialty not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidName(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, DirectoryError::Store(StoreError::Unavailable(_)))
    }
}

/// Name → specialty mapping and doctor-count bookkeeping
pub struct SpecialtyDirectory {
    connection: StoreConnection,
    logger: Arc<dyn MutationLogger>,
}

impl SpecialtyDirectory {
    pub fn new(connection: StoreConnection) -> Self {
        Self {
            connection,
            logger: Arc::new(NoMutationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn MutationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Every specialty, decoded for display. Read failures yield an empty list.
    pub async fn list_all(&self) -> Vec<Specialty> {
        read_all(&self.connection, SPECIALTY_COLLECTION)
            .await
            .iter()
            .map(|doc| Specialty::from_document(&doc.id, &doc.fields))
            .collect()
    }

    /// One specialty by id
    pub async fn get(&self, id: &str) -> Result<Specialty, DirectoryError> {
        let store = writable(&self.connection, "fetch specialty")?;
        store
            .get_one(SPECIALTY_COLLECTION, id)
            .await?
            .map(|doc| Specialty::from_document(&doc.id, &doc.fields))
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    /// Case-insensitive exact lookup by name over the whole collection
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Specialty>, DirectoryError> {
        Ok(self
            .find_document(name, "look up specialty")
            .await?
            .map(|doc| Specialty::from_document(&doc.id, &doc.fields)))
    }

    async fn find_document(
        &self,
        name: &str,
        operation: &str,
    ) -> Result<Option<Document>, DirectoryError> {
        let store = writable(&self.connection, operation)?;
        let documents = store.list_all(SPECIALTY_COLLECTION).await?;
        Ok(documents
            .into_iter()
            .find(|doc| Specialty::document_named(&doc.fields, name)))
    }

    /// Id of the specialty named `name`, creating it with `doctorCount = 1`
    /// when absent. An existing specialty's count is left untouched.
    pub async fn get_or_create(&self, name: &str) -> Result<String, DirectoryError> {
        let name = SpecialtyName::try_new(name)?;

        if let Some(existing) = self.find_document(name.as_str(), "get or create specialty").await? {
            debug!("Found existing specialty: {}", existing.id);
            return Ok(existing.id);
        }

        let store = writable(&self.connection, "create specialty")?;
        let id = store
            .create(
                SPECIALTY_COLLECTION,
                None,
                Specialty::first_use_document(name.as_str(), Utc::now()),
            )
            .await
            .inspect_err(|e| error!("Error creating specialty {}: {}", name, e))?;

        info!("Created new specialty: {} ({})", name, id);
        self.logger.log(MutationEvent::new(
            "specialty_created",
            json!({ "id": id, "name": name.as_str(), "doctorCount": 1 }),
        ));
        Ok(id)
    }

    /// Add one doctor to the named specialty, creating it (at count 1) if
    /// it does not exist yet.
    pub async fn increment(&self, name: &str) -> Result<(), DirectoryError> {
        let name = SpecialtyName::try_new(name)?;

        let Some(existing) = self
            .find_document(name.as_str(), "increment specialty count")
            .await?
        else {
            info!("Specialty not found, creating with count 1: {}", name);
            self.get_or_create(name.as_str()).await?;
            return Ok(());
        };

        let store = writable(&self.connection, "increment specialty count")?;
        store
            .update_fields(
                SPECIALTY_COLLECTION,
                &existing.id,
                vec![(fields::DOCTOR_COUNT.to_string(), FieldUpdate::Increment(1))],
            )
            .await
            .inspect_err(|e| error!("Error incrementing specialty count for {}: {}", name, e))?;

        info!("Incremented count for specialty: {}", name);
        self.logger.log(MutationEvent::new(
            "specialty_incremented",
            json!({ "id": existing.id, "name": name.as_str() }),
        ));
        Ok(())
    }

    /// Remove one doctor from the named specialty.
    ///
    /// A count of 1 or less (or a count that is not a number) deletes the
    /// specialty document. An unknown name is logged and ignored.
    pub async fn decrement(&self, name: &str) -> Result<(), DirectoryError> {
        let name = SpecialtyName::try_new(name)?;

        let Some(existing) = self
            .find_document(name.as_str(), "decrement specialty count")
            .await?
        else {
            warn!(
                "Attempted to decrement count for non-existent specialty: {}",
                name
            );
            return Ok(());
        };

        let store = writable(&self.connection, "decrement specialty count")?;
        let current = store.get_one(SPECIALTY_COLLECTION, &existing.id).await?;
        let count = current.as_ref().and_then(|doc| stored_count(&doc.fields));

        match count {
            Some(count) if count > 1.0 => {
                store
                    .update_fields(
                        SPECIALTY_COLLECTION,
                        &existing.id,
                        vec![(fields::DOCTOR_COUNT.to_string(), FieldUpdate::Increment(-1))],
                    )
                    .await
                    .inspect_err(|e| {
                        error!("Error decrementing specialty count for {}: {}", name, e)
                    })?;
                info!("Decremented count for specialty: {}", name);
                self.logger.log(MutationEvent::new(
                    "specialty_decremented",
                    json!({ "id": existing.id, "name": name.as_str() }),
                ));
            }
            _ => {
                store
                    .delete(SPECIALTY_COLLECTION, &existing.id)
                    .await
                    .inspect_err(|e| error!("Error deleting specialty {}: {}", name, e))?;
                info!("Deleted specialty (count <= 1 or invalid): {}", name);
                self.logger.log(MutationEvent::new(
                    "specialty_deleted",
                    json!({ "id": existing.id, "name": name.as_str(), "previousCount": count }),
                ));
            }
        }
        Ok(())
    }

    /// Administratively add a specialty; its count starts at 0.
    ///
    /// No uniqueness check is made here; the store does not enforce one.
    pub async fn add(&self, specialty: NewSpecialty) -> Result<String, DirectoryError> {
        let store = writable(&self.connection, "add specialty")?;
        let data = specialty.to_document(Utc::now());
        let name = data.get(fields::NAME).cloned();
        let id = store
            .create(SPECIALTY_COLLECTION, None, data)
            .await
            .inspect_err(|e| error!("Error adding specialty: {}", e))?;

        info!("Added new specialty with ID: {}", id);
        self.logger.log(MutationEvent::new(
            "specialty_added",
            json!({ "id": id, "name": name }),
        ));
        Ok(id)
    }

    /// Administratively edit a specialty. Renaming does not touch doctors.
    pub async fn update(&self, id: &str, patch: SpecialtyPatch) -> Result<(), DirectoryError> {
        let store = writable(&self.connection, "update specialty")?;
        if store.get_one(SPECIALTY_COLLECTION, id).await?.is_none() {
            error!("Specialty with ID {} not found for update.", id);
            return Err(DirectoryError::NotFound(id.to_string()));
        }

        store
            .update_fields(SPECIALTY_COLLECTION, id, set_all(patch.to_fields(Utc::now())))
            .await
            .inspect_err(|e| error!("Error updating specialty {}: {}", id, e))?;

        info!("Updated specialty with ID: {}", id);
        self.logger.log(MutationEvent::new(
            "specialty_updated",
            json!({ "id": id, "patch": patch }),
        ));
        Ok(())
    }

    /// Administratively delete a specialty.
    ///
    /// Doctors naming it keep their specialty string; nothing cascades.
    /// A missing id is logged and treated as already removed.
    pub async fn remove(&self, id: &str) -> Result<(), DirectoryError> {
        let store = writable(&self.connection, "delete specialty")?;
        if store.get_one(SPECIALTY_COLLECTION, id).await?.is_none() {
            warn!("Attempted to delete non-existent specialty with ID: {}", id);
            return Ok(());
        }

        store
            .delete(SPECIALTY_COLLECTION, id)
            .await
            .inspect_err(|e| error!("Error deleting specialty {}: {}", id, e))?;

        info!("Deleted specialty with ID: {}", id);
        self.logger
            .log(MutationEvent::new("specialty_removed", json!({ "id": id })));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MockStore;

    fn directory(store: &Arc<MockStore>) -> SpecialtyDirectory {
        SpecialtyDirectory::new(StoreConnection::ready(store.clone()))
    }

    fn count_of(store: &MockStore, id: &str) -> Option<i64> {
        store
            .fields(SPECIALTY_COLLECTION, id)
            .and_then(|f| f.get("doctorCount").and_then(|c| c.as_i64()))
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Cardiology", "doctorCount": 2}));
        let directory = directory(&store);

        let found = directory.find_by_name("cARDIOLOGY").await.unwrap().unwrap();
        assert_eq!(found.id, "s1");
        assert_eq!(found.doctor_count, 2);
        assert!(directory.find_by_name("Neurology").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_or_create_twice_returns_same_id() {
        let store = Arc::new(MockStore::new());
        let directory = directory(&store);

        let first = directory.get_or_create("Oncology").await.unwrap();
        let second = directory.get_or_create("oncology").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(SPECIALTY_COLLECTION), 1);
        assert_eq!(count_of(&store, &first), Some(1));
    }

    #[tokio::test]
    async fn test_get_or_create_rejects_blank_name() {
        let store = Arc::new(MockStore::new());
        let err = directory(&store).get_or_create("  ").await.unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidName(_)));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_increment_existing_adds_one() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Neurology", "doctorCount": 3}));

        directory(&store).increment("neurology").await.unwrap();

        assert_eq!(count_of(&store, "s1"), Some(4));
    }

    #[tokio::test]
    async fn test_increment_missing_creates_with_count_one() {
        let store = Arc::new(MockStore::new());

        directory(&store).increment("Pediatrics").await.unwrap();

        let created = directory(&store)
            .find_by_name("Pediatrics")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.doctor_count, 1);
        assert_eq!(created.description, "");
        assert_eq!(store.len(SPECIALTY_COLLECTION), 1);
    }

    #[tokio::test]
    async fn test_decrement_above_one_subtracts() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Neurology", "doctorCount": 3}));

        directory(&store).decrement("Neurology").await.unwrap();

        assert_eq!(count_of(&store, "s1"), Some(2));
    }

    #[tokio::test]
    async fn test_decrement_at_one_deletes() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Cardiology", "doctorCount": 1}));

        directory(&store).decrement("Cardiology").await.unwrap();

        assert!(store.fields(SPECIALTY_COLLECTION, "s1").is_none());
    }

    #[tokio::test]
    async fn test_decrement_invalid_count_deletes() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Cardiology", "doctorCount": "7"}));
        store.seed(SPECIALTY_COLLECTION, "s2", json!({"name": "Oncology"}));

        directory(&store).decrement("Cardiology").await.unwrap();
        directory(&store).decrement("Oncology").await.unwrap();

        assert_eq!(store.len(SPECIALTY_COLLECTION), 0);
    }

    #[tokio::test]
    async fn test_decrement_unknown_name_is_noop() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Cardiology", "doctorCount": 2}));

        directory(&store).decrement("Dermatology").await.unwrap();

        assert_eq!(count_of(&store, "s1"), Some(2));
        assert!(!store.calls().iter().any(|c| c.starts_with("update_fields")));
    }

    #[tokio::test]
    async fn test_add_starts_at_zero() {
        let store = Arc::new(MockStore::new());
        let id = directory(&store)
            .add(NewSpecialty::new("Radiology").with_description("Imaging"))
            .await
            .unwrap();

        let specialty = directory(&store).get(&id).await.unwrap();
        assert_eq!(specialty.name, "Radiology");
        assert_eq!(specialty.description, "Imaging");
        assert_eq!(specialty.doctor_count, 0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = Arc::new(MockStore::new());
        let err = directory(&store)
            .update("nope", SpecialtyPatch::new().with_name("X"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_allows_manual_count_correction() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Cardiology", "doctorCount": 9}));

        directory(&store)
            .update("s1", SpecialtyPatch::new().with_doctor_count(2))
            .await
            .unwrap();

        assert_eq!(count_of(&store, "s1"), Some(2));
        assert!(store.fields(SPECIALTY_COLLECTION, "s1").unwrap().contains_key("updatedAt"));
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let store = Arc::new(MockStore::new());
        directory(&store).remove("ghost").await.unwrap();
        assert!(!store.calls().iter().any(|c| c.starts_with("delete")));
    }

    #[tokio::test]
    async fn test_list_all_degrades_on_read_failure() {
        let store = Arc::new(MockStore::new());
        store.seed(SPECIALTY_COLLECTION, "s1", json!({"name": "Cardiology"}));
        store.fail_nth("list_all", 1);

        assert!(directory(&store).list_all().await.is_empty());
        assert_eq!(directory(&store).list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_reads_empty_and_rejects_writes() {
        let directory = SpecialtyDirectory::new(StoreConnection::unavailable("no config"));

        assert!(directory.list_all().await.is_empty());
        let err = directory.increment("Cardiology").await.unwrap_err();
        assert!(err.is_unavailable());
        let err = directory.add(NewSpecialty::new("X")).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
