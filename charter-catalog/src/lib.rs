pub mod catalog;
pub mod seed;

pub use catalog::{CatalogError, CharterCatalog};
