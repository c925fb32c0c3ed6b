//! Completion and status summaries.

use crate::board::domain::{COLUMNS, Task, TaskStatus};
use serde::Serialize;

/// Mean progress across `tasks`, rounded half up. Zero for no tasks.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "half-up rounding is computed with integer division on purpose"
)]
pub fn average_progress(tasks: &[Task]) -> u8 {
    let count = u64::try_from(tasks.len()).unwrap_or(u64::MAX);
    if count == 0 {
        return 0;
    }
    let sum: u64 = tasks
        .iter()
        .map(|task| u64::from(task.progress().value()))
        .sum();
    let rounded = (2 * sum + count) / (2 * count);
    u8::try_from(rounded).unwrap_or(100)
}

/// Number of tasks that are `Done` or fully progressed.
#[must_use]
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::Done || task.progress().is_complete())
        .count()
}

/// Task count for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Column status.
    pub status: TaskStatus,
    /// Column label.
    pub label: &'static str,
    /// Tasks in the column.
    pub count: usize,
}

/// Per-column task counts in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDistribution {
    counts: Vec<StatusCount>,
}

impl StatusDistribution {
    /// Counts `tasks` per column.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let counts = COLUMNS
            .iter()
            .map(|column| StatusCount {
                status: column.id,
                label: column.title,
                count: tasks.iter().filter(|task| task.status() == column.id).count(),
            })
            .collect();
        Self { counts }
    }

    /// Returns the count for `status`.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }

    /// Returns every column's count, including empty columns.
    #[must_use]
    pub fn all(&self) -> &[StatusCount] {
        &self.counts
    }

    /// Returns only the columns that hold at least one task; these are the
    /// slices a distribution chart renders.
    pub fn visible(&self) -> impl Iterator<Item = &StatusCount> {
        self.counts.iter().filter(|entry| entry.count > 0)
    }
}
