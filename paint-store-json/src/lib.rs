//! JSON-file implementation of the project store.

mod store;

pub use store::JsonFileStore;
