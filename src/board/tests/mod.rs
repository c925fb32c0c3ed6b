//! Unit tests for the board module.
//!
//! Covers the task domain, the status rule engine, the store commands, and
//! drag-and-drop through the board facade.

mod rule_tests;
