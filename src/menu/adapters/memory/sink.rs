//! Recording message sink.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::menu::{
    domain::{Destination, MessageHandle, MessageId, MessagePayload, UserId},
    ports::{MessageSink, SinkError, SinkResult},
};

/// One call observed by [`InMemoryMessageSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A message was posted.
    Sent {
        /// Handle returned to the caller.
        message: MessageHandle,
        /// Posted payload.
        payload: MessagePayload,
    },
    /// A message was edited.
    Edited {
        /// Edited message.
        message: MessageHandle,
        /// Applied payload.
        payload: MessagePayload,
    },
    /// A message was deleted.
    Deleted {
        /// Deleted message.
        message: MessageHandle,
    },
    /// An ephemeral notice was sent.
    Notified {
        /// Recipient.
        user: UserId,
        /// Notice text.
        text: String,
    },
}

/// Thread-safe sink that keeps posted messages in memory and records
/// every call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageSink {
    state: Arc<RwLock<SinkState>>,
}

#[derive(Debug, Default)]
struct SinkState {
    next_id: u64,
    live: HashMap<MessageId, MessagePayload>,
    events: Vec<SinkEvent>,
    deny_permissions: bool,
}

impl InMemoryMessageSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later send, edit, and delete fail with
    /// [`SinkError::PermissionDenied`].
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the state lock is poisoned.
    pub fn deny_permissions(&self, deny: bool) -> SinkResult<()> {
        self.write()?.deny_permissions = deny;
        Ok(())
    }

    /// Returns every recorded call in order.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the state lock is poisoned.
    pub fn events(&self) -> SinkResult<Vec<SinkEvent>> {
        Ok(self.read()?.events.clone())
    }

    /// Returns the payloads of every edit in order.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the state lock is poisoned.
    pub fn edits(&self) -> SinkResult<Vec<MessagePayload>> {
        Ok(self
            .read()?
            .events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Edited { payload, .. } => Some(payload.clone()),
                _ => None,
            })
            .collect())
    }

    /// Returns every ephemeral notice text in order.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the state lock is poisoned.
    pub fn notices(&self) -> SinkResult<Vec<String>> {
        Ok(self
            .read()?
            .events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Notified { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect())
    }

    /// Returns the number of deletions.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the state lock is poisoned.
    pub fn deletions(&self) -> SinkResult<usize> {
        Ok(self
            .read()?
            .events
            .iter()
            .filter(|event| matches!(event, SinkEvent::Deleted { .. }))
            .count())
    }

    /// Returns what a message currently shows, or `None` once deleted.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the state lock is poisoned.
    pub fn current(&self, message: &MessageHandle) -> SinkResult<Option<MessagePayload>> {
        Ok(self.read()?.live.get(&message.id()).cloned())
    }

    fn read(&self) -> SinkResult<std::sync::RwLockReadGuard<'_, SinkState>> {
        self.state
            .read()
            .map_err(|err| SinkError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> SinkResult<std::sync::RwLockWriteGuard<'_, SinkState>> {
        self.state
            .write()
            .map_err(|err| SinkError::transport(std::io::Error::other(err.to_string())))
    }
}

impl SinkState {
    fn check_permissions(&self) -> SinkResult<()> {
        if self.deny_permissions {
            return Err(SinkError::PermissionDenied(
                "missing manage messages permission".to_owned(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageSink for InMemoryMessageSink {
    async fn send(
        &self,
        destination: &Destination,
        payload: &MessagePayload,
    ) -> SinkResult<MessageHandle> {
        let mut state = self.write()?;
        state.check_permissions()?;
        state.next_id = state.next_id.saturating_add(1);
        let message = MessageHandle::new(MessageId::new(state.next_id), *destination);
        state.live.insert(message.id(), payload.clone());
        state.events.push(SinkEvent::Sent {
            message,
            payload: payload.clone(),
        });
        Ok(message)
    }

    async fn edit(&self, message: &MessageHandle, payload: &MessagePayload) -> SinkResult<()> {
        let mut state = self.write()?;
        state.check_permissions()?;
        let current = state
            .live
            .get_mut(&message.id())
            .ok_or(SinkError::NotFound(message.id()))?;
        *current = match payload.body() {
            Some(body) => MessagePayload::new(body.clone(), payload.controls().clone()),
            None => current
                .body()
                .cloned()
                .map_or_else(MessagePayload::detach, |body| {
                    MessagePayload::new(body, payload.controls().clone())
                }),
        };
        state.events.push(SinkEvent::Edited {
            message: *message,
            payload: payload.clone(),
        });
        Ok(())
    }

    async fn delete(&self, message: &MessageHandle) -> SinkResult<()> {
        let mut state = self.write()?;
        state.check_permissions()?;
        state
            .live
            .remove(&message.id())
            .ok_or(SinkError::NotFound(message.id()))?;
        state.events.push(SinkEvent::Deleted { message: *message });
        Ok(())
    }

    async fn notify(&self, user: UserId, text: &str) -> SinkResult<()> {
        self.write()?.events.push(SinkEvent::Notified {
            user,
            text: text.to_owned(),
        });
        Ok(())
    }
}
