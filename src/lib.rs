//! Kanban: a task board with drag-and-drop status changes and analytics.
//!
//! The board keeps an ordered set of tasks in three columns (`To Do`,
//! `In Progress`, `Done`). Moving a task between columns runs a small rule
//! engine that keeps progress consistent with status, and every view
//! (board, detail editor, analytics, schedules) is recomputed from the
//! latest store snapshot.
//!
//! # Architecture
//!
//! Each bounded context follows a hexagonal layout:
//!
//! - **Domain**: validated value types and pure rules
//! - **Ports**: repository and session-store traits
//! - **Adapters**: in-memory, file, and REST implementations
//! - **Services**: the commands callers issue
//!
//! # Modules
//!
//! - [`board`]: tasks, columns, the store, drag-and-drop, the detail view
//! - [`analytics`]: completion, distribution, and burndown summaries
//! - [`schedule`]: per-user, calendar, and timeline projections
//! - [`account`]: users, authentication, and client sessions
//! - [`api`]: the JSON backend served by `kanban-server`
//! - [`client`]: the HTTP client used by the REST adapters

pub mod account;
pub mod analytics;
pub mod api;
pub mod board;
pub mod client;
pub mod config;
pub mod schedule;
pub mod telemetry;
