pub mod calculations;
pub mod catalog;
pub mod models;
pub mod store;

pub use catalog::{CatalogError, CatalogSource};
pub use models::*;
pub use store::{PROJECT_STORAGE_KEY, ProjectStore, StoreError};
