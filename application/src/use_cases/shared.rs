//! Shared helpers for use cases.
//!
//! Both the specialty directory and the doctor repository short-circuit the
//! same way when the store was never initialized: reads degrade to an empty
//! list, writes fail.

use crate::ports::collection_store::{CollectionStore, Document, StoreConnection, StoreError};
use std::sync::Arc;
use tracing::{debug, error};

/// The store for a write operation, or `Unavailable` (logged).
pub(crate) fn writable<'a>(
    connection: &'a StoreConnection,
    operation: &str,
) -> Result<&'a Arc<dyn CollectionStore>, StoreError> {
    connection
        .store()
        .inspect_err(|e| error!("{}. Cannot {}.", e, operation))
}

/// Every document of a collection; unavailable stores and read failures
/// are logged and yield an empty list.
pub(crate) async fn read_all(connection: &StoreConnection, collection: &str) -> Vec<Document> {
    let store = match connection.store() {
        Ok(store) => store,
        Err(e) => {
            error!("{}. Cannot fetch {}.", e, collection);
            return Vec::new();
        }
    };

    match store.list_all(collection).await {
        Ok(documents) => {
            debug!("Fetched {} documents from {}", documents.len(), collection);
            documents
        }
        Err(e) => {
            error!("Error fetching {}: {}", collection, e);
            Vec::new()
        }
    }
}
