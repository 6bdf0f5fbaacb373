//! Adapters for the menu ports.
//!
//! - [`memory::ListPageSource`]: page source over a fixed list
//! - [`memory::InMemoryMessageSink`]: recording message sink
//! - [`memory::InMemoryReplyCollector`]: queue-fed reply collector

pub mod memory;
