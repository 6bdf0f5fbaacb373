//! Custom control port: domain buttons that mutate a source's filters.

use async_trait::async_trait;

use crate::menu::domain::Button;

/// What a custom control did to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// Filters changed; the source must be prepared again and the menu
    /// returns to the first page.
    Refiltered,
    /// Presentation changed without touching the item list; the current
    /// page is rendered again.
    Restyled,
    /// Nothing changed.
    Unchanged,
}

/// Asks the authorized user for a line of free text.
#[async_trait]
pub trait FollowUpPrompt: Send + Sync {
    /// Posts `prompt` and waits a bounded time for the answer.
    ///
    /// Returns `None` on timeout or when no reply can be collected.
    async fn ask(&self, prompt: &str) -> Option<String>;
}

/// Domain control registered on a session over sources of type `S`.
#[async_trait]
pub trait CustomControl<S>: Send + Sync
where
    S: Send + Sync,
{
    /// Stable identifier routed through [`crate::menu::domain::Intent::Custom`].
    fn id(&self) -> &str;

    /// Projects the button for the current source state, so labels can
    /// reflect the active mode.
    fn button(&self, source: &S) -> Button;

    /// Applies the control to the source.
    async fn activate(&self, source: &mut S, prompt: &dyn FollowUpPrompt) -> ControlOutcome;
}
