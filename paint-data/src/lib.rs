mod loader;

pub use loader::{ProductSheetLoader, ProductSheetLoaderError, ProductSheetRecord};
