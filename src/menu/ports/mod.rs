//! Port contracts for menu sessions.
//!
//! Ports define infrastructure-agnostic interfaces: where pages come from,
//! how messages reach the chat platform, and how free-text replies are
//! collected.

pub mod control;
pub mod reply;
pub mod sink;
pub mod source;

pub use control::{ControlOutcome, CustomControl, FollowUpPrompt};
pub use reply::{Reply, ReplyCollector, ReplyError, ReplyResult};
pub use sink::{MessageSink, SinkError, SinkResult};
pub use source::{PageSource, PageSourceError, PageSourceResult, SelectProvider};
