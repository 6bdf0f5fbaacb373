//! Message sink port: the chat transport as seen by a menu session.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::menu::domain::{Destination, MessageHandle, MessageId, MessagePayload, UserId};

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Chat transport contract.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Posts a new message.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::PermissionDenied`] when the bot may not post
    /// at the destination.
    async fn send(
        &self,
        destination: &Destination,
        payload: &MessagePayload,
    ) -> SinkResult<MessageHandle>;

    /// Replaces the content and controls of a posted message. A payload
    /// without a body keeps the current content.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::NotFound`] when the message is gone.
    async fn edit(&self, message: &MessageHandle, payload: &MessagePayload) -> SinkResult<()>;

    /// Deletes a posted message.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::NotFound`] when the message is already gone.
    async fn delete(&self, message: &MessageHandle) -> SinkResult<()>;

    /// Sends a notice only `user` can see.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Transport`] when the notice cannot be
    /// delivered.
    async fn notify(&self, user: UserId, text: &str) -> SinkResult<()>;
}

/// Errors returned by message sinks.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// The bot lacks the permission needed for the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The target message no longer exists.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SinkError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
