//! Collection Store port
//!
//! Defines the interface to a key-addressed document store holding named
//! collections of loosely-typed JSON documents.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Collection holding doctor documents
pub const DOCTORS_COLLECTION: &str = "doctors";

/// Collection holding specialty documents (singular name is part of the
/// stored data contract)
pub const SPECIALTY_COLLECTION: &str = "specialty";

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document {collection}/{id} does not exist")]
    NotFound { collection: String, id: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// A stored document: its id plus top-level fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Change applied to one top-level field by [`CollectionStore::update_fields`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    /// Replace the field with this value
    Set(Value),
    /// Atomically add to a numeric field; a missing or non-numeric field
    /// counts as 0
    Increment(i64),
}

/// Build `Set` updates for every entry of a field map.
pub fn set_all(fields: Map<String, Value>) -> Vec<(String, FieldUpdate)> {
    fields
        .into_iter()
        .map(|(key, value)| (key, FieldUpdate::Set(value)))
        .collect()
}

/// Key-addressed collection store
///
/// This port defines how the application layer reads and writes documents.
/// Implementations (adapters) live in the infrastructure layer. Writes may
/// become visible to later reads only eventually.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Every document in the collection; an empty collection is `Ok(vec![])`
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// One document, or `None` if it does not exist
    async fn get_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Write a new document, generating an id when `id` is `None`.
    /// An explicit id overwrites any existing document. Returns the id.
    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError>;

    /// Merge the given top-level fields into an existing document.
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<(), StoreError>;

    /// Remove a document; removing a missing document is not an error
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

/// An explicitly constructed store client, or the reason none could be built.
#[derive(Clone)]
pub enum StoreConnection {
    Ready(Arc<dyn CollectionStore>),
    Unavailable { reason: String },
}

impl StoreConnection {
    pub fn ready(store: Arc<dyn CollectionStore>) -> Self {
        StoreConnection::Ready(store)
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreConnection::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, StoreConnection::Ready(_))
    }

    /// The store, or [`StoreError::Unavailable`] carrying the reason
    pub fn store(&self) -> Result<&Arc<dyn CollectionStore>, StoreError> {
        match self {
            StoreConnection::Ready(store) => Ok(store),
            StoreConnection::Unavailable { reason } => Err(StoreError::Unavailable(reason.clone())),
        }
    }
}

impl std::fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreConnection::Ready(_) => write!(f, "StoreConnection::Ready"),
            StoreConnection::Unavailable { reason } => {
                write!(f, "StoreConnection::Unavailable({})", reason)
            }
        }
    }
}
