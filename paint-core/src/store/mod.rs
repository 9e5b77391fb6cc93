//! Persistence boundary for project snapshots.
//!
//! The estimate itself is never persisted: it is always recomputed from the
//! stored surfaces, selections and pricing, so a stale snapshot cannot be
//! mistaken for current pricing.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ProjectState;

/// Storage key under which the interactive project snapshot lives.
pub const PROJECT_STORAGE_KEY: &str = "project";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(String),

    #[error("malformed snapshot for key '{key}': {reason}")]
    Malformed { key: String, reason: String },
}

/// A durable key-value store for project snapshots.
///
/// Loading a snapshot written by an older version must succeed, with absent
/// fields filled from defaults; only genuinely corrupt data is an error.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Loads the snapshot for `key`, or `None` when nothing was ever saved.
    async fn load(&self, key: &str) -> Result<Option<ProjectState>, StoreError>;

    /// Persists the snapshot verbatim under `key`, replacing any previous
    /// snapshot atomically.
    async fn save(&self, key: &str, state: &ProjectState) -> Result<(), StoreError>;

    /// Removes the snapshot for `key`. Removing an absent key is not an
    /// error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
