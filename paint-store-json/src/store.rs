use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use paint_core::models::ProjectState;
use paint_core::store::{ProjectStore, StoreError};

/// Keeps one `<key>.json` file per key under a data directory.
///
/// Saves go through a temp file and rename, so a crash mid-write leaves the
/// previous snapshot intact. Loads rely on the models' serde defaults:
/// fields a snapshot predates are filled in, so old files keep loading as
/// the schema grows.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn load(&self, key: &str) -> Result<Option<ProjectState>, StoreError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        let state = serde_json::from_slice(&bytes).map_err(|e| StoreError::Malformed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(state))
    }

    async fn save(&self, key: &str, state: &ProjectState) -> Result<(), StoreError> {
        let json =
            serde_json::to_vec_pretty(state).map_err(|e| StoreError::Io(e.to_string()))?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        debug!(key, path = %path.display(), "project snapshot saved");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}
