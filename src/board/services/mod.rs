//! Application services for the task board.

mod board;
mod drag;
mod store;

pub use board::Board;
pub use drag::{DragCoordinator, DragEnd, DropOutcome, DropZone};
pub use store::{TaskStoreError, TaskStoreResult, TaskStoreService};
