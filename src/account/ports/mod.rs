//! Port contracts for accounts and sessions.

pub mod repository;
pub mod session_store;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use session_store::{SessionStore, SessionStoreError, SessionStoreResult};
