//! Task status and the board's fixed column layout.

use super::{ParseTaskStatusError, Progress};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status. Each status is rendered as exactly one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// All statuses in column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Returns the column heading for this status.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the progress a task must carry after moving into this status.
    ///
    /// `Todo` resets to 0 and `Done` completes to 100. `InProgress` keeps the
    /// current value.
    #[must_use]
    pub const fn settle_progress(self, current: Progress) -> Progress {
        match self {
            Self::Todo => Progress::NONE,
            Self::InProgress => current,
            Self::Done => Progress::COMPLETE,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "TODO" | "TO_DO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board column: a status paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Status this column collects; doubles as the drop-zone id.
    pub id: TaskStatus,
    /// Display label.
    pub title: &'static str,
}

/// The three board columns in display order.
pub const COLUMNS: [Column; 3] = [
    Column {
        id: TaskStatus::Todo,
        title: TaskStatus::Todo.title(),
    },
    Column {
        id: TaskStatus::InProgress,
        title: TaskStatus::InProgress.title(),
    },
    Column {
        id: TaskStatus::Done,
        title: TaskStatus::Done.title(),
    },
];
