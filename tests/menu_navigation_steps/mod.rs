//! Step definitions for menu navigation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
