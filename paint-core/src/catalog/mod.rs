//! Catalog boundary: the source trait an actual provider implements, and
//! pure filters over product lists.

pub mod filters;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Product;

/// Errors a catalog source may report. All of them are recoverable: the
/// provider layer falls back to cached or built-in data rather than letting
/// any of these block an estimate.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog request timed out")]
    Timeout,

    #[error("malformed catalog payload: {0}")]
    Malformed(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// A remote (or otherwise fallible) origin of catalog products.
///
/// Implementations perform the single-shot fetch; fallback policy lives in
/// the provider that composes them.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
