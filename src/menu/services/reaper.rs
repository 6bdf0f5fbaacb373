//! Timeout reaper: expires a session once its deadline passes.

use mockable::Clock;
use tokio::task::JoinHandle;

use crate::menu::{
    ports::{MessageSink, PageSource},
    services::handle::SessionHandle,
};

/// Background task that sleeps until a session's absolute deadline and
/// then expires it.
///
/// Expiry is idempotent, so a reaper racing a user's stop tears the menu
/// down once.
#[derive(Debug)]
pub struct TimeoutReaper {
    task: JoinHandle<()>,
}

impl TimeoutReaper {
    /// Spawns the reaper on the current tokio runtime.
    #[must_use]
    pub fn spawn<S, K, C>(handle: SessionHandle<S, K, C>) -> Self
    where
        S: PageSource + 'static,
        K: MessageSink + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let task = tokio::spawn(async move {
            let remaining = handle.remaining().await;
            tokio::time::sleep(remaining).await;
            if let Err(err) = handle.expire().await {
                tracing::warn!(error = %err, "menu expiry teardown failed");
            }
        });
        Self { task }
    }

    /// Cancels the reaper without expiring the session.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Returns `true` once the reaper has run or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the reaper to finish.
    pub async fn join(self) {
        if let Err(err) = self.task.await
            && !err.is_cancelled()
        {
            tracing::warn!(error = %err, "timeout reaper panicked");
        }
    }
}
