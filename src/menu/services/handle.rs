//! Shared handle used by host event handlers and the timeout reaper.

use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::menu::{
    domain::{Intent, Interaction, SessionState, Transition, UserId},
    ports::{MessageSink, PageSource},
    services::{
        reaper::TimeoutReaper,
        session::{MenuResult, MenuSession},
    },
};

/// Cloneable handle to a live session.
///
/// The mutex serializes transitions: an interaction, a stop and an
/// expiry never interleave.
pub struct SessionHandle<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    inner: Arc<Mutex<MenuSession<S, K, C>>>,
}

impl<S, K, C> Clone for SessionHandle<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, K, C> SessionHandle<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    /// Wraps a started session.
    #[must_use]
    pub fn new(session: MenuSession<S, K, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Handles one control activation.
    ///
    /// # Errors
    ///
    /// See [`MenuSession::interact`].
    pub async fn interact(&self, interaction: &Interaction) -> MenuResult<Transition> {
        self.inner.lock().await.interact(interaction).await
    }

    /// Maps a raw platform component event to an intent and handles it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::menu::services::MenuError::Domain`] for unknown
    /// component keys, otherwise see [`MenuSession::interact`].
    pub async fn interact_component(
        &self,
        user: UserId,
        key: &str,
        values: &[String],
    ) -> MenuResult<Transition> {
        let intent = Intent::from_component(key, values)?;
        self.interact(&Interaction::new(user, intent)).await
    }

    /// Stops the session.
    ///
    /// # Errors
    ///
    /// See [`MenuSession::stop`].
    pub async fn stop(&self) -> MenuResult<Transition> {
        self.inner.lock().await.stop().await
    }

    /// Expires the session.
    ///
    /// # Errors
    ///
    /// See [`MenuSession::expire`].
    pub async fn expire(&self) -> MenuResult<Transition> {
        self.inner.lock().await.expire().await
    }

    /// Returns a copy of the session state.
    pub async fn snapshot(&self) -> SessionState {
        self.inner.lock().await.state().clone()
    }

    /// Returns the time left before expiry.
    pub async fn remaining(&self) -> std::time::Duration {
        self.inner.lock().await.remaining()
    }
}

impl<S, K, C> SessionHandle<S, K, C>
where
    S: PageSource + 'static,
    K: MessageSink + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Arms the timeout for this session.
    #[must_use]
    pub fn spawn_reaper(&self) -> TimeoutReaper {
        TimeoutReaper::spawn(self.clone())
    }
}
