//! In-memory adapters for menu ports.
//!
//! These adapters keep all state in process. Hosts use the list source
//! directly; the sink and reply collector back tests and local demos.

mod list_source;
mod reply;
mod sink;

pub use list_source::{ListPageSource, PageFormatter};
pub use reply::{DEFAULT_REPLY_CAPACITY, InMemoryReplyCollector};
pub use sink::{InMemoryMessageSink, SinkEvent};
