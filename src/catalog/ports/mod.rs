//! Catalogue ports.

mod catalog;

pub use catalog::{CatalogError, CatalogResult, ItemCatalog};
