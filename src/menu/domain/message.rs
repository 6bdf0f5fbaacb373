//! Message-level values exchanged with the chat platform.

use serde::{Deserialize, Serialize};

use super::{ChannelId, ControlSet, Intent, MessageId, Renderable, UserId};

/// Where a menu message is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    channel: ChannelId,
    ephemeral: bool,
}

impl Destination {
    /// Creates a destination in a channel, visible to everyone.
    #[must_use]
    pub const fn channel(channel: ChannelId) -> Self {
        Self {
            channel,
            ephemeral: false,
        }
    }

    /// Creates a destination visible only to the invoking user.
    #[must_use]
    pub const fn ephemeral(channel: ChannelId) -> Self {
        Self {
            channel,
            ephemeral: true,
        }
    }

    /// Returns the channel.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel
    }

    /// Returns `true` for transient, user-only responses.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}

/// Command invocation that opens a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    user: UserId,
    destination: Destination,
}

impl Invocation {
    /// Creates an invocation.
    #[must_use]
    pub const fn new(user: UserId, destination: Destination) -> Self {
        Self { user, destination }
    }

    /// Returns the invoking user, who becomes the authorized user.
    #[must_use]
    pub const fn user(&self) -> UserId {
        self.user
    }

    /// Returns where the menu is posted.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }
}

/// Handle to a message posted by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageHandle {
    id: MessageId,
    destination: Destination,
}

impl MessageHandle {
    /// Creates a handle.
    #[must_use]
    pub const fn new(id: MessageId, destination: Destination) -> Self {
        Self { id, destination }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the channel holding the message.
    #[must_use]
    pub const fn channel(&self) -> ChannelId {
        self.destination.channel_id()
    }

    /// Returns `true` when the message is a transient response.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        self.destination.is_ephemeral()
    }
}

/// Content and controls for one send or edit.
///
/// A payload without a body only replaces the controls and keeps the
/// current message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Renderable>,
    controls: ControlSet,
}

impl MessagePayload {
    /// Creates a payload with content and controls.
    #[must_use]
    pub const fn new(body: Renderable, controls: ControlSet) -> Self {
        Self {
            body: Some(body),
            controls,
        }
    }

    /// Creates a plain-text payload without controls.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Renderable::text(content), ControlSet::detached())
    }

    /// Creates a payload that strips every control and leaves the content
    /// untouched.
    #[must_use]
    pub const fn detach() -> Self {
        Self {
            body: None,
            controls: ControlSet::detached(),
        }
    }

    /// Returns the content, if the payload replaces it.
    #[must_use]
    pub const fn body(&self) -> Option<&Renderable> {
        self.body.as_ref()
    }

    /// Returns the controls.
    #[must_use]
    pub const fn controls(&self) -> &ControlSet {
        &self.controls
    }
}

/// A control activation delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    user: UserId,
    intent: Intent,
}

impl Interaction {
    /// Creates an interaction.
    #[must_use]
    pub const fn new(user: UserId, intent: Intent) -> Self {
        Self { user, intent }
    }

    /// Returns the originating user.
    #[must_use]
    pub const fn user(&self) -> UserId {
        self.user
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn intent(&self) -> &Intent {
        &self.intent
    }
}
