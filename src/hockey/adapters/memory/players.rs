//! In-memory player directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::hockey::{
    domain::{Player, PlayerProfile, PlayerSeasonStats},
    ports::{FeedError, FeedResult, PlayerDirectory},
};

/// Thread-safe player records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    players: HashMap<u64, Player>,
    stats: HashMap<(u64, String), PlayerSeasonStats>,
}

impl InMemoryPlayerDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a player.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the state lock is poisoned.
    pub fn insert(&self, player: Player) -> FeedResult<()> {
        self.write()?.players.insert(player.id, player);
        Ok(())
    }

    /// Records a player's totals for a season.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the state lock is poisoned.
    pub fn insert_stats(
        &self,
        id: u64,
        season: impl Into<String>,
        stats: PlayerSeasonStats,
    ) -> FeedResult<()> {
        self.write()?.stats.insert((id, season.into()), stats);
        Ok(())
    }

    fn write(&self) -> FeedResult<std::sync::RwLockWriteGuard<'_, DirectoryState>> {
        self.state
            .write()
            .map_err(|err| FeedError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl PlayerDirectory for InMemoryPlayerDirectory {
    async fn player(&self, id: u64, season: &str) -> FeedResult<PlayerProfile> {
        let state = self
            .state
            .read()
            .map_err(|err| FeedError::transport(std::io::Error::other(err.to_string())))?;
        let player = state
            .players
            .get(&id)
            .cloned()
            .ok_or_else(|| FeedError::NotFound(format!("player {id}")))?;
        let stats = state.stats.get(&(id, season.to_owned())).copied();
        Ok(PlayerProfile {
            player,
            season: season.to_owned(),
            stats,
        })
    }
}
