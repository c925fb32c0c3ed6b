//! Task store commands: add, save, delete, and snapshot reads.

use crate::board::{
    domain::{NewTask, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task store commands.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// The single mutation path for task records.
pub struct TaskStoreService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskStoreService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskStoreService<R>
where
    R: TaskRepository,
{
    /// Creates a task store over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task with zero progress and no assignees and appends it to
    /// the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when input validation fails or
    /// [`TaskStoreError::Repository`] when persistence fails.
    pub async fn add(&self, input: NewTask) -> TaskStoreResult<Task> {
        let task = Task::create(input)?;
        let stored = self.repository.store(&task).await?;
        tracing::debug!(task_id = %stored.id(), status = %stored.status(), "task added");
        Ok(stored)
    }

    /// Replaces a task by identifier.
    ///
    /// Field edits are applied first. When the requested status differs from
    /// the stored one, the status transition is applied once afterwards, so
    /// moving to `Todo` or `Done` overrides any progress set in the same
    /// save. Returns `Ok(None)` when the task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the edit is invalid or
    /// [`TaskStoreError::Repository`] when persistence fails.
    pub async fn save(&self, updated: Task) -> TaskStoreResult<Option<Task>> {
        let Some(mut committed) = self.repository.find_by_id(updated.id()).await? else {
            tracing::debug!(task_id = %updated.id(), "save ignored for unknown task");
            return Ok(None);
        };
        let stored_status = committed.status();
        let (edit, requested_status) = updated.into_edit();
        committed.apply_edit(edit)?;
        if requested_status != stored_status {
            committed.transition_to(requested_status);
        }
        self.commit(committed).await
    }

    /// Writes an already reconciled task back. Returns `Ok(None)` when the
    /// task has disappeared in the meantime.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn commit(&self, task: Task) -> TaskStoreResult<Option<Task>> {
        match self.repository.update(&task).await {
            Ok(saved) => {
                tracing::debug!(task_id = %saved.id(), status = %saved.status(), "task saved");
                Ok(Some(saved))
            }
            Err(TaskRepositoryError::NotFound(id)) => {
                tracing::debug!(task_id = %id, "commit ignored for unknown task");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a task. Returns `false` when no task had the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn delete(&self, id: &TaskId) -> TaskStoreResult<bool> {
        let removed = self.repository.remove(id).await?;
        tracing::debug!(task_id = %id, removed, "task delete");
        Ok(removed)
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when lookup fails.
    pub async fn find(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns a snapshot of every task in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when lookup fails.
    pub async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }
}
