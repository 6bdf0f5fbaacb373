//! Hockey page sources and schedule controls.

mod controls;
mod leaderboard;
mod players;
mod schedule;
mod standings;

pub use controls::{
    GameflowControl, HeatmapControl, PickDateControl, PickTeamControl, SkipBackControl,
    SkipForwardControl,
};
pub use leaderboard::{DEFAULT_LINES_PER_PAGE, LeaderboardHeader, LeaderboardSource};
pub use players::PlayerSource;
pub use schedule::ScheduleSource;
pub use standings::StandingsSource;
