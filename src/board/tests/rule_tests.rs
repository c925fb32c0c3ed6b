//! Unit tests for the status/progress rule engine and column grouping.

use crate::board::domain::{
    COLUMNS, NewTask, Progress, Task, TaskStatus, apply_status_transition, group_into_columns,
};
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn half_done() -> eyre::Result<Task> {
    let mut task = Task::create(NewTask::new("Half done").in_column(TaskStatus::InProgress))?;
    task.set_progress(Progress::new(50)?);
    Ok(task)
}

#[rstest]
#[case(TaskStatus::Todo, 0)]
#[case(TaskStatus::InProgress, 50)]
#[case(TaskStatus::Done, 100)]
fn transition_settles_progress(
    half_done: eyre::Result<Task>,
    #[case] target: TaskStatus,
    #[case] expected: u8,
) -> eyre::Result<()> {
    let task = half_done?;
    let moved = apply_status_transition(&task, target);
    ensure!(moved.status() == target);
    ensure!(moved.progress().value() == expected);
    ensure!(moved.id() == task.id());
    ensure!(moved.title() == task.title());
    Ok(())
}

#[rstest]
fn transition_does_not_touch_the_input(half_done: eyre::Result<Task>) -> eyre::Result<()> {
    let task = half_done?;
    let snapshot = task.clone();
    let _moved = apply_status_transition(&task, TaskStatus::Done);
    ensure!(task == snapshot);
    Ok(())
}

#[rstest]
fn leaving_done_for_in_progress_keeps_full_progress() -> eyre::Result<()> {
    let done = apply_status_transition(&Task::create(NewTask::new("t"))?, TaskStatus::Done);
    let reopened = apply_status_transition(&done, TaskStatus::InProgress);
    ensure!(reopened.progress().is_complete());
    Ok(())
}

#[rstest]
fn columns_follow_fixed_order() {
    let titles: Vec<&str> = COLUMNS.iter().map(|column| column.title).collect();
    assert_eq!(titles, ["To Do", "In Progress", "Done"]);
}

#[rstest]
fn grouping_keeps_store_order_within_columns() -> eyre::Result<()> {
    let tasks = vec![
        Task::create(NewTask::new("a").in_column(TaskStatus::Done))?,
        Task::create(NewTask::new("b"))?,
        Task::create(NewTask::new("c").in_column(TaskStatus::Done))?,
    ];
    let columns = group_into_columns(&tasks);
    ensure!(columns.len() == 3);
    let titles = |index: usize| -> Vec<String> {
        columns
            .get(index)
            .map(|column| column.tasks.iter().map(|task| task.title().to_string()).collect())
            .unwrap_or_default()
    };
    ensure!(titles(0) == ["b"]);
    ensure!(titles(1).is_empty());
    ensure!(titles(2) == ["a", "c"]);
    Ok(())
}
