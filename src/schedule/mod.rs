//! Per-user and date-based views over a task snapshot.
//!
//! These are pure projections; they never touch the store.

mod calendar;
mod timeline;

pub use calendar::{DayAgenda, month_agenda, tasks_due_on};
pub use timeline::{Timeline, TimelineBar};

use crate::account::domain::UserId;
use crate::board::domain::Task;

/// Returns the tasks assigned to `user`, in store order.
#[must_use]
pub fn tasks_assigned_to(tasks: &[Task], user: &UserId) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.is_assigned_to(user))
        .cloned()
        .collect()
}
