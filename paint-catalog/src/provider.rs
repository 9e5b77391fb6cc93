//! Three-tier catalog resolution: live remote, cached snapshot, built-in
//! defaults. Resolution never fails and never comes back empty; the tier
//! that answered is reported so callers can show a "using cached/default
//! data" note if they care.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use paint_core::catalog::CatalogSource;
use paint_core::models::Product;

use crate::cache::SnapshotCache;
use crate::defaults::builtin_products;

/// Which tier satisfied a catalog resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogOrigin {
    Remote,
    Cache,
    Builtin,
}

/// A resolved catalog: the products plus where they came from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub origin: CatalogOrigin,
}

impl Catalog {
    /// True when the live source did not answer and the products came from
    /// a fallback tier.
    pub fn is_fallback(&self) -> bool {
        self.origin != CatalogOrigin::Remote
    }
}

/// Composes an optional remote source and an optional snapshot cache into
/// the fallback chain. With neither configured, resolution goes straight to
/// the built-in list.
pub struct CatalogProvider {
    source: Option<Box<dyn CatalogSource>>,
    cache: Option<SnapshotCache>,
}

impl CatalogProvider {
    /// A provider with no remote source and no cache: always built-in.
    pub fn offline() -> Self {
        Self {
            source: None,
            cache: None,
        }
    }

    pub fn new(source: Box<dyn CatalogSource>, cache: SnapshotCache) -> Self {
        Self {
            source: Some(source),
            cache: Some(cache),
        }
    }

    pub fn with_source(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source: Some(source),
            cache: None,
        }
    }

    pub fn with_cache(cache: SnapshotCache) -> Self {
        Self {
            source: None,
            cache: Some(cache),
        }
    }

    /// Resolves the catalog through the fallback chain.
    ///
    /// A successful non-empty remote fetch refreshes the cache. Remote
    /// failures and empty results downgrade to the cache tier; a missing,
    /// stale or corrupt cache downgrades to the built-in list. Every
    /// downgrade is logged at `warn`, none of them is an error.
    pub async fn resolve(&self) -> Catalog {
        if let Some(source) = &self.source {
            match source.fetch_products().await {
                Ok(products) if !products.is_empty() => {
                    if let Some(cache) = &self.cache {
                        if let Err(error) = cache.store(&products).await {
                            warn!(%error, "could not refresh catalog snapshot");
                        }
                    }
                    debug!(count = products.len(), "catalog resolved from remote");
                    return Catalog {
                        products,
                        origin: CatalogOrigin::Remote,
                    };
                }
                Ok(_) => warn!("remote catalog returned no products, falling back"),
                Err(error) => warn!(%error, "remote catalog fetch failed, falling back"),
            }
        }

        if let Some(cache) = &self.cache {
            if let Some(products) = cache.load_fresh().await {
                if !products.is_empty() {
                    debug!(count = products.len(), "catalog resolved from snapshot cache");
                    return Catalog {
                        products,
                        origin: CatalogOrigin::Cache,
                    };
                }
            }
        }

        Catalog {
            products: builtin_products(),
            origin: CatalogOrigin::Builtin,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use paint_core::catalog::CatalogError;

    use super::*;

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Network("connection refused".into()))
        }
    }

    struct EmptySource;

    #[async_trait]
    impl CatalogSource for EmptySource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            Ok(Vec::new())
        }
    }

    struct FixedSource(Vec<Product>);

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            Ok(self.0.clone())
        }
    }

    fn temp_cache(name: &str) -> SnapshotCache {
        let path = std::env::temp_dir().join(format!(
            "paint-provider-test-{name}-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        SnapshotCache::with_ttl(path, Duration::from_secs(600))
    }

    #[tokio::test]
    async fn offline_provider_serves_builtin() {
        let catalog = CatalogProvider::offline().resolve().await;

        assert_eq!(catalog.origin, CatalogOrigin::Builtin);
        assert!(!catalog.products.is_empty());
        assert!(catalog.is_fallback());
    }

    #[tokio::test]
    async fn failing_source_without_cache_falls_back_to_builtin() {
        let provider = CatalogProvider::with_source(Box::new(FailingSource));

        let catalog = provider.resolve().await;

        assert_eq!(catalog.origin, CatalogOrigin::Builtin);
        assert!(!catalog.products.is_empty());
    }

    #[tokio::test]
    async fn empty_remote_result_is_treated_as_a_failure() {
        let provider = CatalogProvider::with_source(Box::new(EmptySource));

        let catalog = provider.resolve().await;

        assert_eq!(catalog.origin, CatalogOrigin::Builtin);
        assert!(!catalog.products.is_empty());
    }

    #[tokio::test]
    async fn successful_fetch_refreshes_the_cache() {
        let cache = temp_cache("refresh");
        let products = builtin_products();
        let provider =
            CatalogProvider::new(Box::new(FixedSource(products.clone())), cache.clone());

        let catalog = provider.resolve().await;

        assert_eq!(catalog.origin, CatalogOrigin::Remote);
        assert!(!catalog.is_fallback());
        assert_eq!(cache.load_fresh().await, Some(products));
        let _ = std::fs::remove_file(cache.path());
    }

    #[tokio::test]
    async fn failing_source_with_fresh_cache_serves_the_cache() {
        let cache = temp_cache("cache-tier");
        cache.store(&builtin_products()).await.unwrap();
        let provider = CatalogProvider::new(Box::new(FailingSource), cache.clone());

        let catalog = provider.resolve().await;

        assert_eq!(catalog.origin, CatalogOrigin::Cache);
        assert_eq!(catalog.products, builtin_products());
        let _ = std::fs::remove_file(cache.path());
    }

    #[tokio::test]
    async fn stale_cache_falls_through_to_builtin() {
        let path = std::env::temp_dir().join(format!(
            "paint-provider-test-stale-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let writer = SnapshotCache::with_ttl(&path, Duration::from_secs(600));
        writer.store(&builtin_products()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let stale = SnapshotCache::with_ttl(&path, Duration::ZERO);
        let provider = CatalogProvider::new(Box::new(FailingSource), stale);

        let catalog = provider.resolve().await;

        assert_eq!(catalog.origin, CatalogOrigin::Builtin);
        let _ = std::fs::remove_file(&path);
    }
}
