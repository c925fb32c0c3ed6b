//! Board facade: store commands, drag-and-drop, and the open detail view.

use super::{DragCoordinator, DragEnd, DropOutcome, TaskStoreResult, TaskStoreService};
use crate::account::domain::UserId;
use crate::analytics::ProjectAnalytics;
use crate::board::{
    domain::{BoardColumn, NewTask, Task, TaskId, group_into_columns},
    ports::TaskRepository,
};
use std::sync::{Arc, PoisonError, RwLock};

/// Board state shared by every view: the task store plus the task open in
/// the detail editor.
///
/// The detail view stores only the task identifier and resolves it from the
/// store on every read, so a drop or save is visible to it immediately.
pub struct Board<R>
where
    R: TaskRepository,
{
    store: TaskStoreService<R>,
    drag: DragCoordinator<R>,
    selected: Arc<RwLock<Option<TaskId>>>,
}

impl<R> Clone for Board<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            drag: self.drag.clone(),
            selected: Arc::clone(&self.selected),
        }
    }
}

impl<R> Board<R>
where
    R: TaskRepository,
{
    /// Creates a board over `repository` with no task open.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        let store = TaskStoreService::new(repository);
        Self {
            drag: DragCoordinator::new(store.clone()),
            store,
            selected: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the underlying task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStoreService<R> {
        &self.store
    }

    /// Returns every task in store order.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup fails.
    pub async fn tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.store.list().await
    }

    /// Returns the three columns with their tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup fails.
    pub async fn columns(&self) -> TaskStoreResult<Vec<BoardColumn>> {
        Ok(group_into_columns(&self.store.list().await?))
    }

    /// Returns analytics for the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup fails.
    pub async fn analytics(&self) -> TaskStoreResult<ProjectAnalytics> {
        Ok(ProjectAnalytics::from_tasks(&self.store.list().await?))
    }

    /// Returns the tasks assigned to `user`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup fails.
    pub async fn tasks_for(&self, user: &UserId) -> TaskStoreResult<Vec<Task>> {
        Ok(crate::schedule::tasks_assigned_to(&self.store.list().await?, user))
    }

    /// Adds a task.
    ///
    /// # Errors
    ///
    /// See [`TaskStoreService::add`].
    pub async fn add_task(&self, input: NewTask) -> TaskStoreResult<Task> {
        self.store.add(input).await
    }

    /// Saves a task edited in the detail editor.
    ///
    /// # Errors
    ///
    /// See [`TaskStoreService::save`].
    pub async fn save_task(&self, updated: Task) -> TaskStoreResult<Option<Task>> {
        self.store.save(updated).await
    }

    /// Deletes a task, closing the detail view when it shows that task.
    ///
    /// # Errors
    ///
    /// See [`TaskStoreService::delete`].
    pub async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<bool> {
        let removed = self.store.delete(id).await?;
        let mut selected = self.selected.write().unwrap_or_else(PoisonError::into_inner);
        if selected.as_ref() == Some(id) {
            *selected = None;
        }
        Ok(removed)
    }

    /// Applies a completed drag gesture.
    ///
    /// # Errors
    ///
    /// See [`DragCoordinator::drop_task`].
    pub async fn drag_end(&self, drag: DragEnd) -> TaskStoreResult<DropOutcome> {
        self.drag.drop_task(drag).await
    }

    /// Opens the detail view on a task. Returns `None`, leaving the view
    /// unchanged, when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup fails.
    pub async fn open_details(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let task = self.store.find(id).await?;
        if task.is_some() {
            *self.selected.write().unwrap_or_else(PoisonError::into_inner) = Some(id.clone());
        }
        Ok(task)
    }

    /// Closes the detail view.
    pub fn close_details(&self) {
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns the task open in the detail view, as currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup fails.
    pub async fn selected_task(&self) -> TaskStoreResult<Option<Task>> {
        let selected = self
            .selected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match selected {
            Some(id) => self.store.find(&id).await,
            None => Ok(None),
        }
    }
}
