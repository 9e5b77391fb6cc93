//! Timestamped on-disk snapshot of the product catalog.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use paint_core::catalog::CatalogError;
use paint_core::models::Product;

/// How long a snapshot counts as fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// The persisted cache payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub fetched_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

/// A JSON file holding the last successfully resolved catalog, with a
/// bounded freshness window.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    path: PathBuf,
    ttl: Duration,
}

impl SnapshotCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_ttl(path, DEFAULT_TTL)
    }

    pub fn with_ttl(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached products, when a snapshot exists and is still inside the
    /// freshness window. A missing, stale or corrupt snapshot yields `None`
    /// (corruption is logged; it is a fallback tier, not a failure).
    pub async fn load_fresh(&self) -> Option<Vec<Product>> {
        let snapshot = self.load().await?;
        let age = Utc::now().signed_duration_since(snapshot.fetched_at);
        let ttl = chrono::Duration::from_std(self.ttl).ok()?;
        if age > ttl {
            return None;
        }
        Some(snapshot.products)
    }

    /// The raw snapshot regardless of age, when one exists and parses.
    pub async fn load(&self) -> Option<Snapshot> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return None,
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "discarding corrupt catalog snapshot");
                None
            }
        }
    }

    /// Replaces the snapshot with the given products, stamped now. The
    /// write goes through a temp file and rename so a crash cannot leave a
    /// half-written snapshot behind.
    pub async fn store(&self, products: &[Product]) -> Result<(), CatalogError> {
        let snapshot = Snapshot {
            fetched_at: Utc::now(),
            products: products.to_vec(),
        };
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
