//! Hockey domain values: clubs, games, standings, players and chart
//! selection.

mod date;
mod game;
mod humanize;
mod player;
mod standings;
mod team;
mod visualization;

pub use date::parse_date;
pub use game::{GameStatus, GameType, ScheduledGame};
pub use humanize::humanize_list;
pub use player::{Player, PlayerProfile, PlayerSeasonStats};
pub use standings::{Standing, StandingsGroup, StandingsView};
pub use team::{TEAMS, Team, match_teams, team_by_name, team_by_tri_code};
pub use visualization::{
    ChartMode, Gameflow, GameflowMetric, HeatmapStyle, Strength, Visualization,
};
