//! Adapter implementations for account ports.

pub mod file;
pub mod memory;
pub mod rest;
