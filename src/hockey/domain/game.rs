//! Scheduled games and their chart links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ChartMode, Gameflow, HeatmapStyle, Visualization, team_by_name};

const HEATMAP_BASE_URL: &str = "https://www.naturalstattrick.com/heatmaps/games/";
const GRAPH_BASE_URL: &str = "https://www.naturalstattrick.com/graphs/";

/// Coarse game status reported by the schedule feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Not started yet.
    Preview,
    /// In progress.
    Live,
    /// Finished.
    Final,
}

impl GameStatus {
    /// Returns the feed's name for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Live => "Live",
            Self::Final => "Final",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Competition a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    /// Pre-season.
    PreSeason,
    /// Regular season.
    RegularSeason,
    /// Playoffs.
    Playoffs,
    /// All-star game.
    AllStars,
}

impl GameType {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreSeason => "Pre Season",
            Self::RegularSeason => "Regular Season",
            Self::Playoffs => "Playoffs",
            Self::AllStars => "All Stars",
        }
    }
}

/// One game in the schedule feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGame {
    /// Feed identifier, e.g. `2020020474`.
    pub game_id: u64,
    /// Competition.
    pub game_type: GameType,
    /// Puck drop.
    pub start: DateTime<Utc>,
    /// Current status.
    pub status: GameStatus,
    /// Home club name.
    pub home_team: String,
    /// Away club name.
    pub away_team: String,
    /// Home goals.
    pub home_score: u32,
    /// Away goals.
    pub away_score: u32,
    /// Home shots on goal.
    pub home_shots: u32,
    /// Away shots on goal.
    pub away_shots: u32,
}

impl ScheduledGame {
    /// Returns the season code, e.g. `20202021`, derived from the first
    /// four digits of the game id.
    #[must_use]
    pub fn season(&self) -> Option<String> {
        let id = self.game_id.to_string();
        let year: u32 = id.get(..4)?.parse().ok()?;
        Some(format!("{year}{}", year.saturating_add(1)))
    }

    /// Returns the game number within the season, the id without its
    /// season and type prefix.
    #[must_use]
    pub fn game_number(&self) -> Option<String> {
        let id = self.game_id.to_string();
        id.get(5..).filter(|number| !number.is_empty()).map(str::to_owned)
    }

    /// Returns the `away @ home` matchup line.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    /// Returns the stats page for the game.
    #[must_use]
    pub fn stats_url(&self) -> Option<String> {
        Some(format!(
            "https://www.naturalstattrick.com/game.php?season={}&game={}&view=limited#gameflow",
            self.season()?,
            self.game_number()?
        ))
    }

    /// Returns the shot heatmap image for a style. Power-play styles name
    /// the club with the advantage by its code.
    #[must_use]
    pub fn heatmap_url(&self, style: HeatmapStyle) -> Option<String> {
        let season = self.season()?;
        let number = self.game_number()?;
        let suffix = match style {
            HeatmapStyle::HomePowerPlay => format!("{}-5v4", team_by_name(&self.home_team)?.tri_code),
            HeatmapStyle::AwayPowerPlay => format!("{}-5v4", team_by_name(&self.away_team)?.tri_code),
            HeatmapStyle::All
            | HeatmapStyle::EvenStrength
            | HeatmapStyle::FiveOnFive
            | HeatmapStyle::ScoreAdjusted => style.as_str().to_owned(),
        };
        Some(format!("{HEATMAP_BASE_URL}{season}/{season}-{number}-{suffix}.png"))
    }

    /// Returns the gameflow graph image.
    #[must_use]
    pub fn gameflow_url(&self, gameflow: Gameflow) -> Option<String> {
        Some(format!(
            "{GRAPH_BASE_URL}{}-{}-{}-{}.png",
            self.season()?,
            self.game_number()?,
            gameflow.metric.code(),
            gameflow.strength
        ))
    }

    /// Returns the chart image selected by `visualization`, if any.
    #[must_use]
    pub fn chart_url(&self, visualization: &Visualization) -> Option<String> {
        match visualization.mode() {
            ChartMode::Plain => None,
            ChartMode::Heatmap => self.heatmap_url(visualization.heatmap()),
            ChartMode::Gameflow => self.gameflow_url(visualization.gameflow()),
        }
    }
}
