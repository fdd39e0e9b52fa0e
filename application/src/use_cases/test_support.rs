//! In-memory mock store shared by the use case tests.
//!
//! Records every call as `"op:collection"` and can be told to fail the n-th
//! future call of an operation, which is how partial multi-step failures are
//! simulated.

use crate::ports::collection_store::{CollectionStore, Document, FieldUpdate, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MockStore {
    collections: Mutex<HashMap<String, BTreeMap<String, Map<String, Value>>>>,
    next_id: Mutex<usize>,
    calls: Mutex<Vec<String>>,
    /// (operation, remaining calls before failure)
    failures: Mutex<Vec<(&'static str, usize)>>,
}

impl MockStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed(&self, collection: &str, id: &str, data: Value) {
        let fields = data.as_object().cloned().unwrap_or_default();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
    }

    pub(crate) fn fields(&self, collection: &str, id: &str) -> Option<Map<String, Value>> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.get(id).cloned())
    }

    pub(crate) fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, |docs| docs.len())
    }

    /// Fail the `nth` (1-based) future call of `operation`.
    pub(crate) fn fail_nth(&self, operation: &'static str, nth: usize) {
        self.failures.lock().unwrap().push((operation, nth));
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, operation: &'static str, collection: &str) -> Result<(), StoreError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", operation, collection));

        let mut failures = self.failures.lock().unwrap();
        let mut triggered = false;
        for (op, remaining) in failures.iter_mut() {
            if *op == operation && *remaining > 0 {
                *remaining -= 1;
                if *remaining == 0 {
                    triggered = true;
                }
            }
        }
        failures.retain(|(_, remaining)| *remaining > 0);
        if triggered {
            return Err(StoreError::Backend(format!("injected {} failure", operation)));
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for MockStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.record("list_all", collection)?;
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.record("get_one", collection)?;
        Ok(self
            .fields(collection, id)
            .map(|fields| Document::new(id, fields)))
    }

    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError> {
        self.record("create", collection)?;
        let id = match id {
            Some(id) => id.to_string(),
            None => {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                format!("{}-{}", collection, next)
            }
        };
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<(), StoreError> {
        self.record("update_fields", collection)?;
        let mut collections = self.collections.lock().unwrap();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        for (key, update) in updates {
            let value = match update {
                FieldUpdate::Set(value) => value,
                FieldUpdate::Increment(delta) => {
                    let current = doc.get(&key).and_then(Value::as_i64).unwrap_or(0);
                    Value::from(current + delta)
                }
            };
            doc.insert(key, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.record("delete", collection)?;
        if let Some(docs) = self.collections.lock().unwrap().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}
