//! Shared test helpers for in-memory menu integration tests.

use cog_menus::menu::{
    adapters::memory::InMemoryMessageSink,
    domain::{ChannelId, Destination, Invocation, MessagePayload, UserId},
    services::SessionHandle,
};
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// User opening menus in these tests.
pub const OWNER: UserId = UserId::new(501);

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
}

/// Provides a fresh recording sink for each test.
#[fixture]
pub fn sink() -> Arc<InMemoryMessageSink> {
    Arc::new(InMemoryMessageSink::new())
}

/// Provides an invocation in a public channel.
#[fixture]
pub fn invocation() -> Invocation {
    Invocation::new(OWNER, Destination::channel(ChannelId::new(900)))
}

/// Returns the payload currently on the menu message.
///
/// # Errors
///
/// Returns an error when the menu was never sent or has been deleted.
pub async fn on_screen<S, C>(
    handle: &SessionHandle<S, InMemoryMessageSink, C>,
    sink: &InMemoryMessageSink,
) -> Result<MessagePayload, Box<dyn std::error::Error + Send + Sync>>
where
    S: cog_menus::menu::ports::PageSource,
    C: mockable::Clock + Send + Sync,
{
    let state = handle.snapshot().await;
    let message = state.message().copied().ok_or("menu message was never sent")?;
    Ok(sink.current(&message)?.ok_or("menu message is gone")?)
}
