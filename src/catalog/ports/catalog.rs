//! Item catalogue port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::domain::{InstanceId, ItemDefinition, ItemHash, ItemPerk};
use crate::menu::domain::UserId;

/// Result type for catalogue operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read access to item definitions and owned item instances.
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// Looks up definitions in request order. Unknown hashes are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] when the catalogue cannot be
    /// reached.
    async fn definitions(&self, hashes: &[ItemHash]) -> CatalogResult<Vec<ItemDefinition>>;

    /// Lists the perks rolled on an item instance owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the instance is unknown for
    /// that owner.
    async fn instance_perks(&self, owner: UserId, instance: InstanceId)
    -> CatalogResult<Vec<ItemPerk>>;
}

/// Errors raised by catalogue adapters.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The catalogue could not be reached.
    #[error("catalogue error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
