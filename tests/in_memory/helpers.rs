//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use kanban::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Progress, Task, TaskStatus},
    services::Board,
};
use rstest::fixture;

/// Board type used throughout the in-memory tests.
pub type TestBoard = Board<InMemoryTaskRepository>;

/// Provides an empty board.
#[fixture]
pub fn board() -> TestBoard {
    Board::new(Arc::new(InMemoryTaskRepository::new()))
}

/// Adds a task in `status` and sets its progress.
///
/// # Errors
///
/// Returns an error if the task cannot be added or saved.
pub async fn add_with_progress(
    board: &TestBoard,
    title: &str,
    status: TaskStatus,
    progress: u8,
) -> eyre::Result<Task> {
    let mut task = board.add_task(NewTask::new(title).in_column(status)).await?;
    task.set_progress(Progress::new(progress)?);
    board
        .save_task(task)
        .await?
        .ok_or_else(|| eyre::eyre!("task {title} vanished while seeding"))
}
