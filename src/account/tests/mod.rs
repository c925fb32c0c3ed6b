//! Unit tests for the account module.

mod session_tests;
