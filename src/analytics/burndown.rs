//! Day-by-day burndown of scheduled tasks.

use crate::board::domain::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// One day of the burndown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurndownPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Remaining tasks on a straight line from the total down to zero.
    pub ideal: f64,
    /// Tasks not yet done by this day.
    pub actual: u32,
}

/// Burndown over every task that has both a start and a due date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurndownSeries {
    total: u32,
    points: Vec<BurndownPoint>,
}

impl BurndownSeries {
    /// Builds the series, or `None` when no task has both dates.
    ///
    /// The range runs from the earliest start date to the latest due date,
    /// inclusive. A task counts as burned on a day once it is `Done` and its
    /// due date is on or before that day. When every scheduled task is
    /// `Done`, the last day always shows zero remaining.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Option<Self> {
        let scheduled: Vec<(&Task, NaiveDate, NaiveDate)> = tasks
            .iter()
            .filter_map(|task| task.schedule().map(|(start, due)| (task, start, due)))
            .collect();
        let first = scheduled.iter().map(|&(_, start, _)| start).min()?;
        let last = scheduled.iter().map(|&(_, _, due)| due).max()?;
        let last = last.max(first);

        let total = u32::try_from(scheduled.len()).unwrap_or(u32::MAX);
        let done_due: Vec<NaiveDate> = scheduled
            .iter()
            .filter(|(task, _, _)| task.status() == TaskStatus::Done)
            .map(|&(_, _, due)| due)
            .collect();
        let all_done = done_due.len() == scheduled.len();

        let days: Vec<NaiveDate> = first.iter_days().take_while(|day| *day <= last).collect();
        let span = days.len().saturating_sub(1);
        let mut points: Vec<BurndownPoint> = days
            .iter()
            .enumerate()
            .map(|(index, &date)| {
                let burned = done_due.iter().filter(|due| **due <= date).count();
                BurndownPoint {
                    date,
                    ideal: ideal_remaining(total, index, span),
                    actual: total.saturating_sub(u32::try_from(burned).unwrap_or(u32::MAX)),
                }
            })
            .collect();

        if all_done {
            if let Some(final_point) = points.last_mut() {
                final_point.actual = 0;
            }
        }

        Some(Self { total, points })
    }

    /// Returns the number of scheduled tasks the series tracks.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns the points in date order.
    #[must_use]
    pub fn points(&self) -> &[BurndownPoint] {
        &self.points
    }

    /// Returns the point for `date`, if it lies in the range.
    #[must_use]
    pub fn point_on(&self, date: NaiveDate) -> Option<&BurndownPoint> {
        self.points.iter().find(|point| point.date == date)
    }
}

/// Linear decay from `total` on day 0 to zero on day `span`.
fn ideal_remaining(total: u32, index: usize, span: usize) -> f64 {
    if span == 0 {
        return 0.0;
    }
    let remaining_days = u32::try_from(span - index.min(span)).unwrap_or(u32::MAX);
    let span_days = u32::try_from(span).unwrap_or(u32::MAX);
    f64::from(total) * f64::from(remaining_days) / f64::from(span_days)
}
