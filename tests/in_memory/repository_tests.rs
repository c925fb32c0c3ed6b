//! In-memory task repository behaviour.

use kanban::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_ids(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = Task::create_with_id(TaskId::new("1"), NewTask::new("one"))?;
    repo.store(&task).await?;
    match repo.store(&task).await {
        Err(TaskRepositoryError::DuplicateTask(id)) => eyre::ensure!(id == TaskId::new("1")),
        other => eyre::bail!("expected DuplicateTask, got {other:?}"),
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_in_place(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let first = Task::create_with_id(TaskId::new("1"), NewTask::new("one"))?;
    let second = Task::create_with_id(TaskId::new("2"), NewTask::new("two"))?;
    repo.store(&first).await?;
    repo.store(&second).await?;

    let mut moved = first.clone();
    moved.transition_to(TaskStatus::Done);
    repo.update(&moved).await?;

    let ids: Vec<String> = repo
        .list()
        .await?
        .iter()
        .map(|task| task.id().to_string())
        .collect();
    eyre::ensure!(ids == ["1", "2"]);
    eyre::ensure!(repo.find_by_id(first.id()).await? == Some(moved));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let ghost = Task::create(NewTask::new("ghost"))?;
    match repo.update(&ghost).await {
        Err(TaskRepositoryError::NotFound(_)) => Ok(()),
        other => eyre::bail!("expected NotFound, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_reports_whether_anything_was_deleted(
    repo: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let task = Task::create(NewTask::new("short-lived"))?;
    repo.store(&task).await?;
    eyre::ensure!(repo.remove(task.id()).await?);
    eyre::ensure!(!repo.remove(task.id()).await?);
    eyre::ensure!(repo.list().await?.is_empty());
    Ok(())
}
