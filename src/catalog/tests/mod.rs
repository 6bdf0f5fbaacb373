//! Unit tests for the catalogue context.

mod catalog_tests;
