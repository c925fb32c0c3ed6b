//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use kanban::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{Board, DropOutcome},
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = Board<InMemoryTaskRepository>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct DragWorld {
    pub board: TestBoard,
    pub task: Option<Task>,
    pub last_outcome: Option<DropOutcome>,
}

impl DragWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(Arc::new(InMemoryTaskRepository::new())),
            task: None,
            last_outcome: None,
        }
    }

    /// Returns the scenario's task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been seeded yet.
    pub fn task(&self) -> eyre::Result<&Task> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
