//! Shared world state for menu navigation BDD scenarios.

use std::sync::Arc;

use cog_menus::menu::{
    adapters::memory::{InMemoryMessageSink, ListPageSource},
    domain::{MessagePayload, Transition},
    services::{MenuResult, SessionHandle},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Session handle type used by the BDD world.
pub type LineHandle = SessionHandle<ListPageSource<String>, InMemoryMessageSink, DefaultClock>;

/// Scenario world for menu navigation behaviour tests.
pub struct MenuWorld {
    /// Sink recording every message operation.
    pub sink: Arc<InMemoryMessageSink>,
    /// The open menu, once a given step created it.
    pub handle: Option<LineHandle>,
    /// Result of the last interaction.
    pub last_transition: Option<MenuResult<Transition>>,
}

impl MenuWorld {
    /// Creates a world with no menu open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Arc::new(InMemoryMessageSink::new()),
            handle: None,
            last_transition: None,
        }
    }

    /// Returns the open menu.
    pub fn handle(&self) -> Result<&LineHandle, eyre::Report> {
        self.handle
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no menu open in scenario world"))
    }

    /// Returns the payload currently on the menu message.
    pub fn on_screen(&self) -> Result<MessagePayload, eyre::Report> {
        let state = run_async(self.handle()?.snapshot());
        let message = state
            .message()
            .copied()
            .ok_or_else(|| eyre::eyre!("menu message was never sent"))?;
        self.sink
            .current(&message)
            .map_err(|err| eyre::eyre!("sink state unavailable: {err}"))?
            .ok_or_else(|| eyre::eyre!("menu message is gone"))
    }
}

impl Default for MenuWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MenuWorld {
    MenuWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
