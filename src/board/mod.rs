//! Kanban task board.
//!
//! Tasks live in three status columns. Moving a task between columns goes
//! through a single status/progress rule, whether the move comes from a drag
//! gesture or from saving the detail editor. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
