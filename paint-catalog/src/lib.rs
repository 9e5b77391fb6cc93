//! Catalog provider: resolves the product list from a remote source, a
//! cached snapshot, or built-in defaults, in that order, and never fails.

mod cache;
mod defaults;
mod http;
mod provider;

pub use cache::{Snapshot, SnapshotCache};
pub use defaults::builtin_products;
pub use http::{HttpCatalogSource, ProductRecord};
pub use provider::{Catalog, CatalogOrigin, CatalogProvider};
