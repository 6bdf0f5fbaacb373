//! In-memory feeds for tests and offline use.

mod players;
mod schedule;

pub use players::InMemoryPlayerDirectory;
pub use schedule::InMemoryScheduleFeed;
