//! REST adapter delegating task persistence to the backend collaborator.

mod task;

pub use task::RestTaskRepository;
