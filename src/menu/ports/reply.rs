//! Reply collector port for free-text follow-ups.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::menu::domain::UserId;

/// Result type for reply collection.
pub type ReplyResult<T> = Result<T, ReplyError>;

/// A plain chat message posted in answer to a follow-up prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    author: UserId,
    content: String,
}

impl Reply {
    /// Creates a reply.
    #[must_use]
    pub fn new(author: UserId, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
        }
    }

    /// Returns the author.
    #[must_use]
    pub const fn author(&self) -> UserId {
        self.author
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the reply, returning its text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Source of user replies.
///
/// Implementations wait without bound; callers apply their own timeout.
#[async_trait]
pub trait ReplyCollector: Send + Sync {
    /// Waits for the next message authored by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::Closed`] when no further replies can arrive.
    async fn next_reply(&self, user: UserId) -> ReplyResult<Reply>;
}

/// Errors returned by reply collectors.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    /// The reply stream has ended.
    #[error("reply stream closed")]
    Closed,

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReplyError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
