//! In-memory item catalogue.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::{
    domain::{InstanceId, ItemDefinition, ItemHash, ItemPerk},
    ports::{CatalogError, CatalogResult, ItemCatalog},
};
use crate::menu::domain::UserId;

/// Thread-safe catalogue held in memory. Counts definition lookups so
/// tests can observe batching.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemCatalog {
    state: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Default)]
struct CatalogState {
    definitions: HashMap<ItemHash, ItemDefinition>,
    perks: HashMap<(UserId, InstanceId), Vec<ItemPerk>>,
    lookups: usize,
    unavailable: bool,
}

impl InMemoryItemCatalog {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a definition.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] when the state lock is poisoned.
    pub fn insert_definition(&self, definition: ItemDefinition) -> CatalogResult<()> {
        self.write()?
            .definitions
            .insert(definition.hash, definition);
        Ok(())
    }

    /// Records the perks rolled on an owned instance.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] when the state lock is poisoned.
    pub fn insert_perks(
        &self,
        owner: UserId,
        instance: InstanceId,
        perks: Vec<ItemPerk>,
    ) -> CatalogResult<()> {
        self.write()?
            .perks
            .insert((owner, instance), perks);
        Ok(())
    }

    /// Makes every later lookup fail with [`CatalogError::Transport`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] when the state lock is poisoned.
    pub fn set_unavailable(&self, unavailable: bool) -> CatalogResult<()> {
        self.write()?.unavailable = unavailable;
        Ok(())
    }

    /// Returns how many definition lookups were served.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] when the state lock is poisoned.
    pub fn lookups(&self) -> CatalogResult<usize> {
        Ok(self.read()?.lookups)
    }

    fn read(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, CatalogState>> {
        self.state
            .read()
            .map_err(|err| CatalogError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, CatalogState>> {
        self.state
            .write()
            .map_err(|err| CatalogError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl ItemCatalog for InMemoryItemCatalog {
    async fn definitions(&self, hashes: &[ItemHash]) -> CatalogResult<Vec<ItemDefinition>> {
        let mut state = self.write()?;
        if state.unavailable {
            return Err(CatalogError::transport(std::io::Error::other(
                "catalogue unavailable",
            )));
        }
        state.lookups = state.lookups.saturating_add(1);
        Ok(hashes
            .iter()
            .filter_map(|hash| state.definitions.get(hash).cloned())
            .collect())
    }

    async fn instance_perks(
        &self,
        owner: UserId,
        instance: InstanceId,
    ) -> CatalogResult<Vec<ItemPerk>> {
        let state = self.read()?;
        state
            .perks
            .get(&(owner, instance))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("instance {instance}")))
    }
}
