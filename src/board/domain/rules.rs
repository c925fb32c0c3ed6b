//! Status/progress rule and board grouping.

use super::{COLUMNS, Column, Task, TaskStatus};
use serde::Serialize;

/// Returns a copy of `task` moved into `target` with progress settled.
///
/// `Todo` forces progress to 0, `Done` forces 100, `InProgress` keeps the
/// current value. Applying the same target twice yields the same task.
#[must_use]
pub fn apply_status_transition(task: &Task, target: TaskStatus) -> Task {
    let mut moved = task.clone();
    moved.transition_to(target);
    moved
}

/// One rendered board column and the tasks it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    /// Column metadata.
    pub column: Column,
    /// Tasks with the column's status, in store order.
    pub tasks: Vec<Task>,
}

/// Groups a store snapshot into the three board columns.
#[must_use]
pub fn group_into_columns(tasks: &[Task]) -> Vec<BoardColumn> {
    COLUMNS
        .iter()
        .map(|column| BoardColumn {
            column: *column,
            tasks: tasks
                .iter()
                .filter(|task| task.status() == column.id)
                .cloned()
                .collect(),
        })
        .collect()
}
