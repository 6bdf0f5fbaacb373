//! Item definitions, vault entries and perks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host serving item icons and screenshots. Definition asset paths are
/// relative to it.
pub const CATALOG_BASE_URL: &str = "https://bungie.net";

/// Catalogue hash identifying an item or perk definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemHash(u32);

impl ItemHash {
    /// Wraps a raw hash.
    #[must_use]
    pub const fn new(hash: u32) -> Self {
        Self(hash)
    }

    /// Returns the raw hash.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one owned copy of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Wraps a raw instance id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw instance id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static description of an item or perk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Definition hash.
    pub hash: ItemHash,
    /// Display name, when the definition carries one.
    pub name: Option<String>,
    /// Icon path relative to [`CATALOG_BASE_URL`].
    pub icon: Option<String>,
    /// Screenshot path relative to [`CATALOG_BASE_URL`].
    pub screenshot: Option<String>,
}

impl ItemDefinition {
    /// Creates a named definition without artwork.
    #[must_use]
    pub fn named(hash: ItemHash, name: impl Into<String>) -> Self {
        Self {
            hash,
            name: Some(name.into()),
            icon: None,
            screenshot: None,
        }
    }

    /// Returns the display name, or `None` spelled out for unnamed
    /// definitions.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("None")
    }

    /// Returns the absolute icon URL.
    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_deref().map(asset_url)
    }

    /// Returns the absolute screenshot URL.
    #[must_use]
    pub fn screenshot_url(&self) -> Option<String> {
        self.screenshot.as_deref().map(asset_url)
    }
}

fn asset_url(path: &str) -> String {
    format!("{CATALOG_BASE_URL}{path}")
}

/// One item held in a player's vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Definition of the item.
    pub item_hash: ItemHash,
    /// Instance id for items with per-copy state such as rolled perks.
    pub instance: Option<InstanceId>,
}

/// Perk rolled on an item instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPerk {
    /// Definition of the perk.
    pub perk_hash: ItemHash,
    /// Whether the perk is currently active.
    pub is_active: bool,
}
