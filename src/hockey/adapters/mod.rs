//! Hockey adapters.

pub mod memory;
