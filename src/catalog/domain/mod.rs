//! Catalogue domain values.

mod item;

pub use item::{CATALOG_BASE_URL, InstanceId, ItemDefinition, ItemHash, ItemPerk, VaultEntry};
