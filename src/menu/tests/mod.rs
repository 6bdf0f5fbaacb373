//! Unit tests for the menu module.
//!
//! Sessions are driven against the in-memory sink so every send, edit,
//! delete and notice can be asserted.
