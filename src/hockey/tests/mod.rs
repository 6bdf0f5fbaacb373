//! Unit tests for the hockey context.

mod domain_tests;
mod fixtures;
