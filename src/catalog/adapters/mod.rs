//! Catalogue adapters.

pub mod memory;
