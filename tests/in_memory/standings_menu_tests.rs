//! Standings menus driven through raw component keys.

use crate::in_memory::helpers::{OWNER, invocation, on_screen, runtime, sink};
use cog_menus::hockey::{
    domain::{Standing, StandingsView},
    services::StandingsSource,
};
use cog_menus::menu::{
    adapters::memory::InMemoryMessageSink,
    domain::{Invocation, MenuConfig, Renderable, Transition},
    services::{MenuError, MenuSession, SessionHandle},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn row(team: &str, division: &str, rank: u32) -> Standing {
    Standing {
        team: team.to_owned(),
        conference: "Eastern".to_owned(),
        division: division.to_owned(),
        games_played: 10,
        wins: 6,
        losses: 3,
        ot_losses: 1,
        points: 13,
        league_rank: rank,
        streak: "L1".to_owned(),
    }
}

fn title(payload: &cog_menus::menu::domain::MessagePayload) -> Option<String> {
    payload
        .body()
        .and_then(Renderable::as_embed)
        .and_then(|embed| embed.title.clone())
}

/// Pages through division standings with button and dropdown keys.
#[rstest]
fn division_pages_follow_component_keys(
    runtime: io::Result<Runtime>,
    sink: Arc<InMemoryMessageSink>,
    invocation: Invocation,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let rows = [
        row("Boston Bruins", "East", 2),
        row("Toronto Maple Leafs", "North", 1),
        row("Montréal Canadiens", "North", 3),
    ];
    let source = StandingsSource::new(&rows, StandingsView::Division);

    rt.block_on(async {
        let session = MenuSession::start(
            source,
            Arc::clone(&sink),
            Arc::new(DefaultClock),
            MenuConfig::default(),
            invocation,
        )
        .await?;
        let handle = SessionHandle::new(session);
        assert_eq!(
            title(&on_screen(&handle, &sink).await?).as_deref(),
            Some("East Division")
        );

        let forward = handle.interact_component(OWNER, "forward", &[]).await?;
        assert_eq!(forward, Transition::Shown(1));
        let north = on_screen(&handle, &sink).await?;
        assert_eq!(title(&north).as_deref(), Some("North Division"));
        let description = north
            .body()
            .and_then(Renderable::as_embed)
            .and_then(|embed| embed.description.clone());
        assert_eq!(
            description.as_deref(),
            Some(
                "1. Toronto Maple Leafs (6-3-1) 13 pts\n3. Montréal Canadiens (6-3-1) 13 pts"
            )
        );

        let picked = handle
            .interact_component(OWNER, "select", &["0".to_owned()])
            .await?;
        assert_eq!(picked, Transition::Shown(0));

        let unknown = handle.interact_component(OWNER, "zoom", &[]).await;
        assert!(matches!(unknown, Err(MenuError::Domain(_))));
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
}
