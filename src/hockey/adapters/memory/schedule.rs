//! In-memory schedule feed.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

use crate::hockey::{
    domain::ScheduledGame,
    ports::{FeedError, FeedResult, ScheduleFeed},
};

/// Thread-safe schedule held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleFeed {
    state: Arc<RwLock<FeedState>>,
}

#[derive(Debug, Default)]
struct FeedState {
    games: Vec<ScheduledGame>,
    requests: Vec<(NaiveDate, NaiveDate)>,
    unavailable: bool,
}

impl InMemoryScheduleFeed {
    /// Creates a feed serving `games`.
    #[must_use]
    pub fn new(games: Vec<ScheduledGame>) -> Self {
        Self {
            state: Arc::new(RwLock::new(FeedState {
                games,
                ..FeedState::default()
            })),
        }
    }

    /// Makes every later lookup fail with [`FeedError::Transport`].
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the state lock is poisoned.
    pub fn set_unavailable(&self, unavailable: bool) -> FeedResult<()> {
        self.state
            .write()
            .map_err(|err| FeedError::transport(std::io::Error::other(err.to_string())))?
            .unavailable = unavailable;
        Ok(())
    }

    /// Returns every `(from, to)` window requested so far.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the state lock is poisoned.
    pub fn requests(&self) -> FeedResult<Vec<(NaiveDate, NaiveDate)>> {
        Ok(self
            .state
            .read()
            .map_err(|err| FeedError::transport(std::io::Error::other(err.to_string())))?
            .requests
            .clone())
    }
}

#[async_trait]
impl ScheduleFeed for InMemoryScheduleFeed {
    async fn games(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        teams: &[String],
    ) -> FeedResult<Vec<ScheduledGame>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| FeedError::transport(std::io::Error::other(err.to_string())))?;
        state.requests.push((from, to));
        if state.unavailable {
            return Err(FeedError::transport(std::io::Error::other(
                "schedule feed unavailable",
            )));
        }
        let involves = |game: &ScheduledGame| {
            teams.is_empty()
                || teams
                    .iter()
                    .any(|team| *team == game.home_team || *team == game.away_team)
        };
        let mut games: Vec<ScheduledGame> = state
            .games
            .iter()
            .filter(|game| {
                let day = game.start.date_naive();
                (from..=to).contains(&day) && involves(game)
            })
            .cloned()
            .collect();
        games.sort_by_key(|game| game.start);
        Ok(games)
    }
}
