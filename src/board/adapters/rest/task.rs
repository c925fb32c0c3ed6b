//! Task repository backed by the backend collaborator's `/tasks` resource.

use async_trait::async_trait;
use reqwest::Method;

use crate::board::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::client::{BackendClient, ClientError};

/// Task repository that forwards every command to the REST backend.
///
/// Requests are independent: nothing is queued or retried, so two rapid
/// commands on the same task may reach the backend in either order.
#[derive(Debug, Clone)]
pub struct RestTaskRepository {
    client: BackendClient,
}

impl RestTaskRepository {
    /// Creates a repository using `client`.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

const TASKS: &str = "tasks";

#[async_trait]
impl TaskRepository for RestTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task> {
        self.client
            .send_json(Method::POST, &[TASKS], &task.fields())
            .await
            .map_err(TaskRepositoryError::persistence)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        match self
            .client
            .send_json(Method::PUT, &[TASKS, task.id().as_str()], task)
            .await
        {
            Ok(updated) => Ok(updated),
            Err(ClientError::NotFound(_)) => Err(TaskRepositoryError::NotFound(task.id().clone())),
            Err(err) => Err(TaskRepositoryError::persistence(err)),
        }
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<bool> {
        self.client
            .delete(&[TASKS, id.as_str()])
            .await
            .map_err(TaskRepositoryError::persistence)
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.list().await?;
        Ok(tasks.into_iter().find(|task| task.id() == id))
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.client
            .get_json(&[TASKS])
            .await
            .map_err(TaskRepositoryError::persistence)
    }
}
