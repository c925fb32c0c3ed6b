//! End-to-end board flows over the in-memory repository.

use super::helpers::{TestBoard, add_with_progress, board};
use kanban::board::{
    domain::{NewTask, TaskStatus},
    services::{DragEnd, DropOutcome},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analytics_follow_each_command(board: TestBoard) -> eyre::Result<()> {
    let first = add_with_progress(&board, "first", TaskStatus::InProgress, 50).await?;
    add_with_progress(&board, "second", TaskStatus::Todo, 0).await?;

    let before = board.analytics().await?;
    eyre::ensure!(before.total_tasks == 2);
    eyre::ensure!(before.average_progress == 25);
    eyre::ensure!(before.completed_tasks == 0);

    board
        .drag_end(DragEnd::over_zone(first.id().clone(), "DONE"))
        .await?;
    let after = board.analytics().await?;
    eyre::ensure!(after.average_progress == 50);
    eyre::ensure!(after.completed_tasks == 1);
    eyre::ensure!(after.distribution.count(TaskStatus::Done) == 1);

    board.delete_task(first.id()).await?;
    let trimmed = board.analytics().await?;
    eyre::ensure!(trimmed.total_tasks == 1);
    eyre::ensure!(trimmed.average_progress == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_back_to_todo_resets_progress(board: TestBoard) -> eyre::Result<()> {
    let task = add_with_progress(&board, "rework", TaskStatus::InProgress, 70).await?;
    let outcome = board
        .drag_end(DragEnd::new(task.id().clone(), Some(TaskStatus::Todo)))
        .await?;
    let DropOutcome::Moved(moved) = outcome else {
        eyre::bail!("expected the task to move, got {outcome:?}");
    };
    eyre::ensure!(moved.progress().value() == 0);

    let columns = board.columns().await?;
    let todo = columns
        .first()
        .ok_or_else(|| eyre::eyre!("missing To Do column"))?;
    eyre::ensure!(todo.column.title == "To Do");
    eyre::ensure!(todo.tasks == vec![moved]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adding_from_a_column_starts_there_with_no_progress(
    board: TestBoard,
) -> eyre::Result<()> {
    let task = board
        .add_task(NewTask::new("from Done column").in_column(TaskStatus::Done))
        .await?;
    eyre::ensure!(task.status() == TaskStatus::Done);
    eyre::ensure!(task.progress().value() == 0);
    eyre::ensure!(task.assigned_to().is_empty());
    Ok(())
}
