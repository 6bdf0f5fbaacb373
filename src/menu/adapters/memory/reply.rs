//! Queue-fed reply collector.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::menu::{
    domain::UserId,
    ports::{Reply, ReplyCollector, ReplyError, ReplyResult},
};

/// Replies kept before the oldest unclaimed one is dropped.
pub const DEFAULT_REPLY_CAPACITY: usize = 64;

/// Reply collector fed by [`InMemoryReplyCollector::push`].
///
/// Replies by other users stay queued for their own waiters, up to a
/// fixed capacity; once full, the oldest reply is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReplyCollector {
    inner: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    queue: Mutex<QueueState>,
    arrived: Notify,
}

#[derive(Debug)]
struct QueueState {
    replies: VecDeque<Reply>,
    capacity: usize,
    closed: bool,
}

impl Default for QueueState {
    fn default() -> Self {
        Self {
            replies: VecDeque::new(),
            capacity: DEFAULT_REPLY_CAPACITY,
            closed: false,
        }
    }
}

impl InMemoryReplyCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector holding at most `capacity` unclaimed replies.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let collector = Self::default();
        if let Ok(mut queue) = collector.inner.queue.lock() {
            queue.capacity = capacity.max(1);
        }
        collector
    }

    /// Returns the number of replies waiting to be claimed.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::Transport`] when the queue lock is poisoned.
    pub fn pending(&self) -> ReplyResult<usize> {
        Ok(self.lock()?.replies.len())
    }

    /// Queues a reply and wakes every waiter, dropping the oldest queued
    /// reply when the collector is full.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::Transport`] when the queue lock is poisoned.
    pub fn push(&self, reply: Reply) -> ReplyResult<()> {
        let mut queue = self.lock()?;
        if queue.replies.len() >= queue.capacity
            && let Some(dropped) = queue.replies.pop_front()
        {
            tracing::debug!(user = %dropped.author(), "unclaimed reply dropped");
        }
        queue.replies.push_back(reply);
        drop(queue);
        self.inner.arrived.notify_waiters();
        Ok(())
    }

    /// Ends the stream; waiters with nothing queued get
    /// [`ReplyError::Closed`].
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::Transport`] when the queue lock is poisoned.
    pub fn close(&self) -> ReplyResult<()> {
        self.lock()?.closed = true;
        self.inner.arrived.notify_waiters();
        Ok(())
    }

    fn take(&self, user: UserId) -> ReplyResult<Option<Reply>> {
        let mut queue = self.lock()?;
        let position = queue.replies.iter().position(|reply| reply.author() == user);
        match position.and_then(|index| queue.replies.remove(index)) {
            Some(reply) => Ok(Some(reply)),
            None if queue.closed => Err(ReplyError::Closed),
            None => Ok(None),
        }
    }

    fn lock(&self) -> ReplyResult<std::sync::MutexGuard<'_, QueueState>> {
        self.inner
            .queue
            .lock()
            .map_err(|err| ReplyError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl ReplyCollector for InMemoryReplyCollector {
    async fn next_reply(&self, user: UserId) -> ReplyResult<Reply> {
        loop {
            // Register before checking so a push between the check and the
            // wait is not missed.
            let arrived = self.inner.arrived.notified();
            if let Some(reply) = self.take(user)? {
                return Ok(reply);
            }
            arrived.await;
        }
    }
}
