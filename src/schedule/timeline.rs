//! Gantt-style timeline of scheduled tasks.

use crate::board::domain::{Task, TaskId, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// One task's bar on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBar {
    /// Task identifier.
    pub task_id: TaskId,
    /// Task title.
    pub title: String,
    /// Column the task sits in.
    pub status: TaskStatus,
    /// Days from the timeline start to the task's start.
    pub offset_days: i64,
    /// Inclusive length of the task in days.
    pub duration_days: i64,
}

/// Span covering every task that has both a start and a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    start: NaiveDate,
    end: NaiveDate,
    bars: Vec<TimelineBar>,
}

impl Timeline {
    /// Lays out the scheduled tasks, or `None` when none are scheduled.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Option<Self> {
        let scheduled: Vec<(&Task, NaiveDate, NaiveDate)> = tasks
            .iter()
            .filter_map(|task| task.schedule().map(|(start, due)| (task, start, due)))
            .collect();
        let start = scheduled.iter().map(|&(_, begin, _)| begin).min()?;
        let end = scheduled.iter().map(|&(_, _, due)| due).max()?.max(start);

        let bars = scheduled
            .into_iter()
            .map(|(task, begin, due)| TimelineBar {
                task_id: task.id().clone(),
                title: task.title().to_string(),
                status: task.status(),
                offset_days: (begin - start).num_days(),
                duration_days: (due - begin).num_days() + 1,
            })
            .collect();
        Some(Self { start, end, bars })
    }

    /// Returns the earliest start date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the latest due date.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of days covered, inclusive.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns the bars in store order.
    #[must_use]
    pub fn bars(&self) -> &[TimelineBar] {
        &self.bars
    }
}
