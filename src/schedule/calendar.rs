//! Calendar month buckets keyed by due date.

use crate::board::domain::Task;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Tasks due on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAgenda {
    /// The day.
    pub date: NaiveDate,
    /// Tasks whose due date is `date`, in store order.
    pub tasks: Vec<Task>,
}

/// Returns the tasks due on `date`.
#[must_use]
pub fn tasks_due_on(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.due_date() == Some(date))
        .cloned()
        .collect()
}

/// Returns one entry per day of the month, empty days included.
///
/// Returns an empty list when `year`/`month` do not name a real month.
#[must_use]
pub fn month_agenda(tasks: &[Task], year: i32, month: u32) -> Vec<DayAgenda> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| day.month() == month)
        .map(|date| DayAgenda {
            date,
            tasks: tasks_due_on(tasks, date),
        })
        .collect()
}
