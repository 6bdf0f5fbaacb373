//! Timeout reapers firing against live sessions.

use crate::in_memory::helpers::{OWNER, invocation, on_screen, runtime, sink};
use cog_menus::menu::{
    adapters::memory::{InMemoryMessageSink, ListPageSource},
    domain::{Intent, Interaction, Invocation, MenuConfig, SessionPhase, Transition},
    services::{MenuSession, SessionHandle},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn short_lived() -> MenuConfig {
    MenuConfig::default().with_timeout(Duration::from_secs(1))
}

/// An idle menu expires on schedule and ignores later presses.
#[rstest]
fn idle_menu_expires(
    runtime: io::Result<Runtime>,
    sink: Arc<InMemoryMessageSink>,
    invocation: Invocation,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    rt.block_on(async {
        let session = MenuSession::start(
            ListPageSource::lines(["one", "two"]),
            Arc::clone(&sink),
            Arc::new(DefaultClock),
            short_lived(),
            invocation,
        )
        .await?;
        let handle = SessionHandle::new(session);
        handle.spawn_reaper().join().await;

        assert_eq!(handle.snapshot().await.phase(), SessionPhase::Expired);
        let shown = on_screen(&handle, &sink).await?;
        assert!(shown.controls().is_empty());
        let late = handle
            .interact(&Interaction::new(OWNER, Intent::Forward))
            .await?;
        assert_eq!(late, Transition::Inert);
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
}

/// A menu stopped before its deadline is not touched by the reaper.
#[rstest]
fn stopped_menu_outlives_its_reaper(
    runtime: io::Result<Runtime>,
    sink: Arc<InMemoryMessageSink>,
    invocation: Invocation,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    rt.block_on(async {
        let session = MenuSession::start(
            ListPageSource::lines(["one", "two"]),
            Arc::clone(&sink),
            Arc::new(DefaultClock),
            short_lived(),
            invocation,
        )
        .await?;
        let handle = SessionHandle::new(session);
        let reaper = handle.spawn_reaper();
        assert_eq!(handle.stop().await?, Transition::Stopped);
        let events_at_stop = sink.events()?.len();

        reaper.join().await;

        assert_eq!(handle.snapshot().await.phase(), SessionPhase::Stopped);
        assert_eq!(sink.events()?.len(), events_at_stop);
        assert_eq!(sink.deletions()?, 1);
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
}
