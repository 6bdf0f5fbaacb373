//! Cog menus: paginated, interactive chat menus for sports and game-item
//! plugins.
//!
//! A menu is one chat message edited in place. Its pages come from a
//! [`menu::ports::PageSource`] and its buttons and dropdown let the invoking
//! user move between them until the menu is stopped or times out.
//!
//! # Architecture
//!
//! Every context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and state transitions
//! - **Ports**: Abstract trait interfaces for chat transport and data feeds
//! - **Adapters**: Concrete implementations of ports (in-memory here)
//! - **Services**: Orchestration built on the ports
//!
//! # Modules
//!
//! - [`menu`]: Page sources, controls, sessions and the timeout reaper
//! - [`hockey`]: Schedule, standings, player and leaderboard menus
//! - [`catalog`]: Game item catalogue and vault menus

pub mod catalog;
pub mod hockey;
pub mod menu;
