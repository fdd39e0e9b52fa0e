//! Build a [`StoreConnection`] from the `[store]` config section.

use super::{FileCollectionStore, InMemoryCollectionStore};
use crate::config::{FileStoreConfig, StoreBackend};
use roster_application::StoreConnection;
use std::sync::Arc;
use tracing::{info, warn};

/// Connect the configured backend.
///
/// Never fails: a backend that cannot be opened yields
/// [`StoreConnection::Unavailable`] so reads still render empty lists.
pub async fn connect(config: &FileStoreConfig) -> StoreConnection {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            StoreConnection::ready(Arc::new(InMemoryCollectionStore::new()))
        }
        StoreBackend::File => {
            let Some(path) = config.path.as_ref() else {
                warn!("store.path is not configured; store unavailable");
                return StoreConnection::unavailable("store.path is not configured");
            };

            match FileCollectionStore::open(path).await {
                Ok(store) => {
                    info!("Using file store at {}", path.display());
                    StoreConnection::ready(Arc::new(store))
                }
                Err(e) => {
                    warn!("Could not open store at {}: {}", path.display(), e);
                    StoreConnection::unavailable(e.to_string())
                }
            }
        }
    }
}
