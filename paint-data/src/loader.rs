use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use paint_catalog::SnapshotCache;
use paint_core::catalog::CatalogError;
use paint_core::models::{Finish, PriceBand, Product};

/// Errors that can occur when loading a product price sheet.
#[derive(Debug, Error)]
pub enum ProductSheetLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown finish '{finish}' on product {id}")]
    InvalidFinish { id: String, finish: String },

    #[error("Coverage must be positive on product {id}, got {coverage}")]
    InvalidCoverage { id: String, coverage: Decimal },

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Snapshot write error: {0}")]
    Snapshot(#[from] CatalogError),
}

impl From<csv::Error> for ProductSheetLoaderError {
    fn from(err: csv::Error) -> Self {
        ProductSheetLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the product price sheet CSV.
///
/// Expected columns:
/// - `id`: unique product identifier
/// - `brand`, `name`: display strings
/// - `finish`: one of the fixed finish names (e.g. "Satin", "Semi-Gloss")
/// - `coverage`: square feet per gallon, positive
/// - `interior`, `exterior`: `true`/`false` applicability flags
/// - `residential_price`, `commercial_price`: dollars per square foot
/// - `primer`: `true` when the product doubles as its own primer
/// - `primer_note`: free text, may be empty
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductSheetRecord {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub finish: String,
    pub coverage: Decimal,
    pub interior: bool,
    pub exterior: bool,
    pub residential_price: Decimal,
    pub commercial_price: Decimal,
    pub primer: bool,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub primer_note: Option<String>,
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

impl ProductSheetRecord {
    fn into_product(self) -> Result<Product, ProductSheetLoaderError> {
        let finish = Finish::parse(&self.finish).ok_or_else(|| {
            ProductSheetLoaderError::InvalidFinish {
                id: self.id.clone(),
                finish: self.finish.clone(),
            }
        })?;
        if self.coverage <= Decimal::ZERO {
            return Err(ProductSheetLoaderError::InvalidCoverage {
                id: self.id,
                coverage: self.coverage,
            });
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

/// Loader for product price sheets.
///
/// Parses CSV rows into catalog products and writes them into the snapshot
/// cache, where the catalog provider serves them from its cache tier.
pub struct ProductSheetLoader;

impl ProductSheetLoader {
    /// Parse price sheet records from a CSV reader. The reader can be any
    /// `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ProductSheetRecord>, ProductSheetLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ProductSheetRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Validate the records and write them into the snapshot cache,
    /// replacing its previous contents. Loading the same sheet twice
    /// produces the same snapshot.
    ///
    /// Returns the number of products written.
    pub async fn load(
        cache: &SnapshotCache,
        records: Vec<ProductSheetRecord>,
    ) -> Result<usize, ProductSheetLoaderError> {
        let mut products: Vec<Product> = Vec::with_capacity(records.len());
        for record in records {
            let product = record.into_product()?;
            if products.iter().any(|p| p.id == product.id) {
                return Err(ProductSheetLoaderError::DuplicateId(product.id));
            }
            products.push(product);
        }

        cache.store(&products).await?;
        Ok(products.len())
    }
}
