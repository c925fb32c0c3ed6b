//! Read-only project analytics derived from a task snapshot.
//!
//! Nothing here mutates the store; callers recompute after every command.

mod burndown;
mod summary;

pub use burndown::{BurndownPoint, BurndownSeries};
pub use summary::{StatusCount, StatusDistribution, average_progress, completed_count};

use crate::board::domain::Task;
use serde::Serialize;

/// Every analytic for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalytics {
    /// Number of tasks.
    pub total_tasks: usize,
    /// Tasks that are done or fully progressed.
    pub completed_tasks: usize,
    /// Mean progress, rounded.
    pub average_progress: u8,
    /// Tasks per column.
    pub distribution: StatusDistribution,
    /// Burndown of scheduled tasks, when any are scheduled.
    pub burndown: Option<BurndownSeries>,
}

impl ProjectAnalytics {
    /// Computes analytics for `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total_tasks: tasks.len(),
            completed_tasks: completed_count(tasks),
            average_progress: average_progress(tasks),
            distribution: StatusDistribution::from_tasks(tasks),
            burndown: BurndownSeries::from_tasks(tasks),
        }
    }
}

#[cfg(test)]
mod tests;
