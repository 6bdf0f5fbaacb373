//! Ports onto the league statistics feeds.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

use crate::hockey::domain::{PlayerProfile, ScheduledGame};

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Schedule lookups.
#[async_trait]
pub trait ScheduleFeed: Send + Sync {
    /// Lists games played between `from` and `to`, both inclusive, in start
    /// order.
    ///
    /// An empty `teams` slice means every club; otherwise only games
    /// involving at least one listed club name are returned.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the feed cannot be reached.
    async fn games(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        teams: &[String],
    ) -> FeedResult<Vec<ScheduledGame>>;
}

/// Player lookups.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Fetches a player's profile for a season.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NotFound`] when the player is unknown.
    async fn player(&self, id: u64, season: &str) -> FeedResult<PlayerProfile>;
}

/// Errors raised by feed adapters.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The feed could not be reached or answered garbage.
    #[error("feed error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl FeedError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
