//! HTTP catalog source: a single-shot fetch of the flat product list.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use paint_core::catalog::{CatalogError, CatalogSource};
use paint_core::models::{Finish, PriceBand, Product};

/// Default request timeout. A slow catalog must never hold up an estimate;
/// the provider falls back long before a user would notice.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One product as it appears on the wire: camelCase keys, a single price
/// per tier, finish as its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub finish: String,
    pub coverage: Decimal,
    #[serde(default)]
    pub interior: bool,
    #[serde(default)]
    pub exterior: bool,
    pub residential_price: Decimal,
    pub commercial_price: Decimal,
    #[serde(default)]
    pub primer: bool,
    #[serde(default)]
    pub primer_note: Option<String>,
}

impl ProductRecord {
    /// Converts the wire record into the model, enforcing the boundary
    /// invariants (known finish, positive coverage). Plain wire prices
    /// become degenerate min = max = default bands.
    pub fn into_product(self) -> Result<Product, CatalogError> {
        let finish = Finish::parse(&self.finish).ok_or_else(|| {
            CatalogError::Malformed(format!("unknown finish '{}' on product {}", self.finish, self.id))
        })?;
        if self.coverage <= Decimal::ZERO {
            return Err(CatalogError::Malformed(format!(
                "non-positive coverage {} on product {}",
                self.coverage, self.id
            )));
        }
        Ok(Product {
            id: self.id,
            brand: self.brand,
            name: self.name,
            finish,
            coverage: self.coverage,
            interior: self.interior,
            exterior: self.exterior,
            residential: PriceBand::flat(self.residential_price),
            commercial: PriceBand::flat(self.commercial_price),
            primer: self.primer,
            primer_note: self.primer_note,
        })
    }
}

/// Fetches the catalog as a JSON array of [`ProductRecord`]s.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Network(format!(
                "catalog responded with status {}",
                response.status()
            )));
        }

        let records: Vec<ProductRecord> = response
            .json()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        // One bad record does not poison the list; it is dropped with a
        // warning and the rest are served.
        let products = records
            .into_iter()
            .filter_map(|record| match record.into_product() {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!(%error, "skipping invalid catalog record");
                    None
                }
            })
            .collect();

        Ok(products)
    }
}
