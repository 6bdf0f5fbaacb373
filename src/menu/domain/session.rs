//! Menu session state and lifecycle phases.
//!
//! [`SessionState`] is only mutated by the session's transition functions;
//! everything shown on screen is a projection of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ControlSet, MessageHandle, SessionId, UserId};

/// Lifecycle phase of a menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Showing the current page and waiting for an interaction.
    Idle,
    /// Fetching and rendering the next page.
    Transitioning,
    /// Torn down by the user.
    Stopped,
    /// Torn down by the timeout.
    Expired,
}

impl SessionPhase {
    /// Returns `true` once the session is inert.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Stopped | Self::Expired)
    }

    /// Returns the phase as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Transitioning => "transitioning",
            Self::Stopped => "stopped",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of handling one interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The page at this index is now on screen.
    Shown(usize),
    /// Nothing changed and no edit was issued.
    Unchanged,
    /// The source had nothing to show; the error message is on screen and
    /// the controls stay live.
    NoContent,
    /// The interaction came from someone else and was refused.
    Rejected,
    /// The session was stopped by this interaction.
    Stopped,
    /// The session deadline had passed; the session is now expired.
    Expired,
    /// The session was already inert.
    Inert,
}

/// Mutable state of one live menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    id: SessionId,
    authorized_user: UserId,
    current_page: usize,
    phase: SessionPhase,
    message: Option<MessageHandle>,
    controls: ControlSet,
    started_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
}

impl SessionState {
    /// Creates the state for a session about to send its first message.
    #[must_use]
    pub fn new(
        authorized_user: UserId,
        current_page: usize,
        started_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            authorized_user,
            current_page,
            phase: SessionPhase::Idle,
            message: None,
            controls: ControlSet::detached(),
            started_at,
            deadline,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the user allowed to drive the session.
    #[must_use]
    pub const fn authorized_user(&self) -> UserId {
        self.authorized_user
    }

    /// Returns the page on screen.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the menu message, once sent.
    #[must_use]
    pub const fn message(&self) -> Option<&MessageHandle> {
        self.message.as_ref()
    }

    /// Returns the controls currently attached to the message.
    #[must_use]
    pub const fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the absolute expiry point.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns `true` when the deadline has passed at `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// Returns `true` once the session is inert.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Records the message posted for this session.
    pub fn attach(&mut self, message: MessageHandle, controls: ControlSet) {
        self.message = Some(message);
        self.controls = controls;
    }

    /// Marks the start of a page transition.
    pub fn begin_transition(&mut self) {
        if !self.is_terminal() {
            self.phase = SessionPhase::Transitioning;
        }
    }

    /// Marks the end of a page transition.
    pub fn end_transition(&mut self) {
        if self.phase == SessionPhase::Transitioning {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Commits a page change after the edit carrying it succeeded.
    pub fn commit_page(&mut self, page: usize, controls: ControlSet) {
        self.current_page = page;
        self.controls = controls;
    }

    /// Moves the session into a terminal phase.
    ///
    /// Returns `false` when the session was already inert, in which case
    /// nothing changes and the caller must not tear down again.
    pub fn finish(&mut self, phase: SessionPhase) -> bool {
        if self.is_terminal() || !phase.is_terminal() {
            return false;
        }
        self.phase = phase;
        self.controls = ControlSet::detached();
        true
    }
}
