//! `/tasks` handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::{ApiError, AppState};
use crate::account::ports::UserRepository;
use crate::board::{
    domain::{Task, TaskFields, TaskId},
    ports::TaskRepository,
};

pub(super) async fn list<T, U>(
    State(state): State<AppState<T, U>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    Ok(Json(state.tasks.list().await?))
}

pub(super) async fn create<T, U>(
    State(state): State<AppState<T, U>>,
    Json(fields): Json<TaskFields>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    let task = Task::from_fields(TaskId::generate(), fields)?;
    let stored = state.tasks.store(&task).await?;
    tracing::debug!(task_id = %stored.id(), "task created");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// The path identifier wins over any `id` in the body.
pub(super) async fn replace<T, U>(
    State(state): State<AppState<T, U>>,
    Path(id): Path<String>,
    Json(fields): Json<TaskFields>,
) -> Result<Json<Task>, ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    let task = Task::from_fields(TaskId::new(id), fields)?;
    Ok(Json(state.tasks.update(&task).await?))
}

pub(super) async fn remove<T, U>(
    State(state): State<AppState<T, U>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    let id = TaskId::new(id);
    if state.tasks.remove(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("task {id}")))
    }
}
