//! Domain model for the task board.
//!
//! Tasks, their status and progress rules, and the fixed column layout. All
//! infrastructure concerns stay outside of this boundary.

mod error;
mod ids;
mod rules;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{Progress, TaskId, TaskTitle};
pub use rules::{BoardColumn, apply_status_transition, group_into_columns};
pub use status::{COLUMNS, Column, TaskStatus};
pub use task::{NewTask, Task, TaskEdit, TaskFields};
