//! Hockey menus: schedules, standings, players and pick'ems leaderboards
//! presented through [`crate::menu`] sessions.
//!
//! Feeds are reached through the [`ports`] traits so sources can be
//! exercised against the in-memory adapters.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
