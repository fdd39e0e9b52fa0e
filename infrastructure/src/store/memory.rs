//! Process-local collection store.

use super::collections::Collections;
use async_trait::async_trait;
use roster_application::{CollectionStore, Document, FieldUpdate, StoreError};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::trace;

/// [`CollectionStore`] backed by a map behind a [`RwLock`].
///
/// Generated ids are simple-format v4 UUIDs. Every update is applied under
/// the write lock, so increments never lose concurrent writes.
#[derive(Default)]
pub struct InMemoryCollectionStore {
    collections: RwLock<Collections>,
}

impl InMemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing contents
    pub fn with_collections(collections: Collections) -> Self {
        Self {
            collections: RwLock::new(collections),
        }
    }

    pub async fn snapshot(&self) -> Collections {
        self.collections.read().await.clone()
    }
}

pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[async_trait]
impl CollectionStore for InMemoryCollectionStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self.collections.read().await.list(collection))
    }

    async fn get_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.collections.read().await.get(collection, id))
    }

    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = id.map(str::to_string).unwrap_or_else(generate_id);
        self.collections
            .write()
            .await
            .insert(collection, id.clone(), fields);
        trace!("memory store: created {}/{}", collection, id);
        Ok(id)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<(), StoreError> {
        self.collections
            .write()
            .await
            .update(collection, id, updates)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let removed = self.collections.write().await.remove(collection, id);
        trace!("memory store: delete {}/{} (present: {})", collection, id, removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_create_generates_distinct_ids() {
        let store = InMemoryCollectionStore::new();
        let a = store.create("doctors", None, Map::new()).await.unwrap();
        let b = store.create("doctors", None, Map::new()).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert_eq!(store.list_all("doctors").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_id_overwrites() {
        let store = InMemoryCollectionStore::new();
        store
            .create("specialty", Some("s1"), fields(json!({"name": "A"})))
            .await
            .unwrap();
        store
            .create("specialty", Some("s1"), fields(json!({"name": "B"})))
            .await
            .unwrap();

        let doc = store.get_one("specialty", "s1").await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "B");
    }

    #[tokio::test]
    async fn test_missing_collection_reads_empty() {
        let store = InMemoryCollectionStore::new();
        assert!(store.list_all("doctors").await.unwrap().is_empty());
        assert!(store.get_one("doctors", "x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryCollectionStore::new();
        store.create("doctors", Some("d1"), Map::new()).await.unwrap();
        store.delete("doctors", "d1").await.unwrap();
        store.delete("doctors", "d1").await.unwrap();
        assert!(store.get_one("doctors", "d1").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(InMemoryCollectionStore::new());
        store
            .create("specialty", Some("s1"), fields(json!({"doctorCount": 0})))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .update_fields(
                            "specialty",
                            "s1",
                            vec![("doctorCount".into(), FieldUpdate::Increment(1))],
                        )
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let doc = store.get_one("specialty", "s1").await.unwrap().unwrap();
        assert_eq!(doc.fields["doctorCount"], 50);
    }
}
