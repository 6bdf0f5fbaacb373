//! Player records served by the player directory.

use serde::{Deserialize, Serialize};

/// Basic player biography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// League player identifier.
    pub id: u64,
    /// Full name.
    pub full_name: String,
    /// Position code, e.g. `C` or `G`.
    pub position: String,
    /// Current club name, if rostered.
    pub team: Option<String>,
    /// Jersey number, if assigned.
    pub number: Option<u32>,
}

/// Scoring totals for one season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    /// Games played.
    pub games: u32,
    /// Goals scored.
    pub goals: u32,
    /// Assists.
    pub assists: u32,
    /// Plus-minus.
    pub plus_minus: i32,
    /// Penalty minutes.
    pub penalty_minutes: u32,
}

impl PlayerSeasonStats {
    /// Returns goals plus assists.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.goals.saturating_add(self.assists)
    }
}

/// A player together with their totals for the requested season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Biography.
    pub player: Player,
    /// Season code, e.g. `20202021`.
    pub season: String,
    /// Totals, absent when the player did not play that season.
    pub stats: Option<PlayerSeasonStats>,
}
