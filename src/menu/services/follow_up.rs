//! Bounded free-text follow-up prompts.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::menu::{
    domain::{Destination, MessageHandle, MessagePayload, UserId},
    ports::{FollowUpPrompt, MessageSink, ReplyCollector},
};

/// Prompt that posts a question next to the menu and waits for the
/// authorized user's next message.
///
/// On timeout the question is deleted and `None` is returned.
pub struct FollowUp<K>
where
    K: MessageSink,
{
    sink: Arc<K>,
    replies: Option<Arc<dyn ReplyCollector>>,
    destination: Destination,
    user: UserId,
    timeout: Duration,
}

impl<K> FollowUp<K>
where
    K: MessageSink,
{
    /// Creates a prompt scoped to `user`.
    #[must_use]
    pub fn new(
        sink: Arc<K>,
        replies: Option<Arc<dyn ReplyCollector>>,
        destination: Destination,
        user: UserId,
        timeout: Duration,
    ) -> Self {
        Self {
            sink,
            replies,
            destination,
            user,
            timeout,
        }
    }

    async fn discard(&self, prompt: &MessageHandle) {
        if let Err(err) = self.sink.delete(prompt).await {
            tracing::warn!(message_id = %prompt.id(), error = %err, "failed to delete follow-up prompt");
        }
    }
}

#[async_trait]
impl<K> FollowUpPrompt for FollowUp<K>
where
    K: MessageSink,
{
    async fn ask(&self, prompt: &str) -> Option<String> {
        let Some(replies) = self.replies.as_ref() else {
            tracing::debug!(user = %self.user, "no reply collector configured; follow-up skipped");
            return None;
        };
        let question = match self
            .sink
            .send(&self.destination, &MessagePayload::text(prompt))
            .await
        {
            Ok(question) => question,
            Err(err) => {
                tracing::warn!(user = %self.user, error = %err, "failed to post follow-up prompt");
                return None;
            }
        };
        match tokio::time::timeout(self.timeout, replies.next_reply(self.user)).await {
            Ok(Ok(reply)) => Some(reply.into_content()),
            Ok(Err(err)) => {
                tracing::warn!(user = %self.user, error = %err, "follow-up reply failed");
                self.discard(&question).await;
                None
            }
            Err(_) => {
                tracing::debug!(
                    user = %self.user,
                    timeout_secs = self.timeout.as_secs(),
                    "follow-up timed out"
                );
                self.discard(&question).await;
                None
            }
        }
    }
}
