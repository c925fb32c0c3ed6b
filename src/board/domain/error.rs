//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The progress value is outside `[0, 100]`.
    #[error("progress {0} is out of range, expected 0-100")]
    ProgressOutOfRange(u8),

    /// The due date falls before the start date.
    #[error("due date {due} is before start date {start}")]
    DueBeforeStart {
        /// Task start date.
        start: NaiveDate,
        /// Task due date.
        due: NaiveDate,
    },
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
