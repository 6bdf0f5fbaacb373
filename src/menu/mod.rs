//! Paginated interactive menus for chat-bot cogs.
//!
//! A menu is one message, edited in place, whose buttons and dropdown page
//! through a [`ports::PageSource`]. One user drives it, interactions are
//! serialized, and the session expires at an absolute deadline. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
