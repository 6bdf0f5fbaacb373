//! In-memory catalogue for tests and offline use.

mod catalog;

pub use catalog::InMemoryItemCatalog;
