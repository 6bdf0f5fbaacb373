//! Hockey ports.

mod feed;

pub use feed::{FeedError, FeedResult, PlayerDirectory, ScheduleFeed};
