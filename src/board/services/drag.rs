//! Drag-and-drop between board columns.

use super::{TaskStoreResult, TaskStoreService};
use crate::board::{
    domain::{Task, TaskId, TaskStatus, apply_status_transition},
    ports::TaskRepository,
};

/// Drop zone identifiers as reported by the board's drag gestures.
pub struct DropZone;

impl DropZone {
    /// Resolves a drop-zone id to its column status.
    ///
    /// Unknown ids resolve to `None`, which the coordinator treats as a drop
    /// outside every column.
    #[must_use]
    pub fn parse(zone_id: &str) -> Option<TaskStatus> {
        TaskStatus::try_from(zone_id).ok()
    }
}

/// A completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    /// Task being dragged.
    pub task_id: TaskId,
    /// Column the task was released over, if any.
    pub over: Option<TaskStatus>,
}

impl DragEnd {
    /// Creates a drag released over `over`.
    #[must_use]
    pub const fn new(task_id: TaskId, over: Option<TaskStatus>) -> Self {
        Self { task_id, over }
    }

    /// Creates a drag released over the zone with the given raw id.
    #[must_use]
    pub fn over_zone(task_id: TaskId, zone_id: &str) -> Self {
        Self::new(task_id, DropZone::parse(zone_id))
    }
}

/// What a drop did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task was moved and committed.
    Moved(Task),
    /// Released outside every column; nothing changed.
    NoDropTarget,
    /// The dragged task no longer exists; nothing changed.
    TaskNotFound,
}

impl DropOutcome {
    /// Returns the moved task, if any.
    #[must_use]
    pub const fn moved(&self) -> Option<&Task> {
        match self {
            Self::Moved(task) => Some(task),
            Self::NoDropTarget | Self::TaskNotFound => None,
        }
    }
}

/// Applies drops to the task store.
pub struct DragCoordinator<R>
where
    R: TaskRepository,
{
    store: TaskStoreService<R>,
}

impl<R> Clone for DragCoordinator<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<R> DragCoordinator<R>
where
    R: TaskRepository,
{
    /// Creates a coordinator committing through `store`.
    #[must_use]
    pub const fn new(store: TaskStoreService<R>) -> Self {
        Self { store }
    }

    /// Moves the dragged task into the destination column.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskStoreError::Repository`] when lookup or
    /// persistence fails.
    pub async fn drop_task(&self, drag: DragEnd) -> TaskStoreResult<DropOutcome> {
        let Some(target) = drag.over else {
            return Ok(DropOutcome::NoDropTarget);
        };
        let Some(task) = self.store.find(&drag.task_id).await? else {
            tracing::debug!(task_id = %drag.task_id, "drop ignored for unknown task");
            return Ok(DropOutcome::TaskNotFound);
        };
        let moved = apply_status_transition(&task, target);
        Ok(self
            .store
            .commit(moved)
            .await?
            .map_or(DropOutcome::TaskNotFound, DropOutcome::Moved))
    }
}
