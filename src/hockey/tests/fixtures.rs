//! Shared games, feeds and menu wiring for hockey tests.

use chrono::{NaiveDate, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

use crate::hockey::{
    adapters::memory::InMemoryScheduleFeed,
    domain::{GameStatus, GameType, ScheduledGame, Standing},
    services::{
        GameflowControl, HeatmapControl, PickDateControl, PickTeamControl, ScheduleSource,
        SkipBackControl, SkipForwardControl,
    },
};
use crate::menu::{
    adapters::memory::{InMemoryMessageSink, InMemoryReplyCollector},
    domain::{ChannelId, Destination, Embed, Invocation, MenuConfig, Renderable, UserId},
    services::MenuBuilder,
};

pub const OWNER: UserId = UserId::new(7);

pub type ScheduleMenu = MenuBuilder<
    ScheduleSource<InMemoryScheduleFeed>,
    InMemoryMessageSink,
    DefaultClock,
>;

pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("valid date")
}

pub fn game(
    game_id: u64,
    date: NaiveDate,
    away_team: &str,
    home_team: &str,
    status: GameStatus,
) -> ScheduledGame {
    let start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("valid time"));
    ScheduledGame {
        game_id,
        game_type: GameType::RegularSeason,
        start,
        status,
        home_team: home_team.to_owned(),
        away_team: away_team.to_owned(),
        home_score: 3,
        away_score: 2,
        home_shots: 31,
        away_shots: 28,
    }
}

/// Montréal at Toronto, the usual test game.
#[fixture]
pub fn classic() -> ScheduledGame {
    game(
        2_020_020_474,
        day(2021, 1, 16),
        "Montréal Canadiens",
        "Toronto Maple Leafs",
        GameStatus::Final,
    )
}

#[fixture]
pub fn week() -> Vec<ScheduledGame> {
    vec![
        game(
            2_020_020_474,
            day(2021, 1, 16),
            "Montréal Canadiens",
            "Toronto Maple Leafs",
            GameStatus::Final,
        ),
        game(
            2_020_020_480,
            day(2021, 1, 17),
            "Boston Bruins",
            "New York Rangers",
            GameStatus::Live,
        ),
        game(
            2_020_020_495,
            day(2021, 1, 19),
            "Toronto Maple Leafs",
            "Edmonton Oilers",
            GameStatus::Preview,
        ),
        game(
            2_020_020_530,
            day(2021, 1, 30),
            "Calgary Flames",
            "Vancouver Canucks",
            GameStatus::Preview,
        ),
    ]
}

#[fixture]
pub fn invocation() -> Invocation {
    Invocation::new(OWNER, Destination::channel(ChannelId::new(44)))
}

/// Schedule menu over the week from 2021-01-15 with every control.
pub fn schedule_menu(
    feed: &Arc<InMemoryScheduleFeed>,
    sink: &Arc<InMemoryMessageSink>,
    replies: &Arc<InMemoryReplyCollector>,
) -> ScheduleMenu {
    MenuBuilder::new(
        ScheduleSource::new(Arc::clone(feed), day(2021, 1, 15)),
        Arc::clone(sink),
        Arc::new(DefaultClock),
        MenuConfig::default(),
    )
    .with_control(SkipBackControl)
    .with_control(SkipForwardControl)
    .with_control(PickTeamControl)
    .with_control(PickDateControl)
    .with_control(HeatmapControl)
    .with_control(GameflowControl)
    .with_replies(Arc::<InMemoryReplyCollector>::clone(replies))
}

pub fn as_embed(body: Option<&Renderable>) -> Embed {
    body.and_then(Renderable::as_embed)
        .cloned()
        .expect("embed body")
}

pub fn standing(team: &str, conference: &str, division: &str, rank: u32) -> Standing {
    Standing {
        team: team.to_owned(),
        conference: conference.to_owned(),
        division: division.to_owned(),
        games_played: 20,
        wins: 12,
        losses: 6,
        ot_losses: 2,
        points: 26,
        league_rank: rank,
        streak: "W2".to_owned(),
    }
}
