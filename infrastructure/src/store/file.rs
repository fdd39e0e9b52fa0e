//! Collection store persisted as a JSON snapshot file.
//!
//! The whole data set is held in memory and rewritten after every mutation.
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves the previous snapshot intact.

use super::collections::Collections;
use super::memory::generate_id;
use async_trait::async_trait;
use roster_application::{CollectionStore, Document, FieldUpdate, StoreError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// [`CollectionStore`] backed by `{collection: {id: fields}}` on disk
pub struct FileCollectionStore {
    path: PathBuf,
    collections: Mutex<Collections>,
}

impl FileCollectionStore {
    /// Open the snapshot at `path`, starting empty if it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let collections = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Collections::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No store snapshot at {}, starting empty", path.display());
                Collections::default()
            }
            Err(e) => {
                return Err(StoreError::Backend(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            path,
            collections: Mutex::new(collections),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, collections: &Collections) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(collections)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| backend_error("create directory for", &self.path, e))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| backend_error("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| backend_error("replace", &self.path, e))?;

        debug!("Persisted store snapshot to {}", self.path.display());
        Ok(())
    }
}

fn backend_error(action: &str, path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Backend(format!("cannot {} {}: {}", action, path.display(), e))
}

#[async_trait]
impl CollectionStore for FileCollectionStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self.collections.lock().await.list(collection))
    }

    async fn get_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.collections.lock().await.get(collection, id))
    }

    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = id.map(str::to_string).unwrap_or_else(generate_id);
        let mut collections = self.collections.lock().await;
        let mut next = collections.clone();
        next.insert(collection, id.clone(), fields);
        self.persist(&next).await?;
        *collections = next;
        Ok(id)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        let mut next = collections.clone();
        next.update(collection, id, updates)?;
        self.persist(&next).await?;
        *collections = next;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        let mut next = collections.clone();
        if next.remove(collection, id) {
            self.persist(&next).await?;
            *collections = next;
        }
        Ok(())
    }
}
