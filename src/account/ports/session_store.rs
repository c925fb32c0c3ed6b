//! Port for the client-side session store.

use crate::account::domain::Session;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Holds at most one session for the local client.
pub trait SessionStore: Send + Sync {
    /// Loads the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the store cannot be read.
    fn load(&self) -> SessionStoreResult<Option<Session>>;

    /// Replaces the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the store cannot be written.
    fn save(&self, session: &Session) -> SessionStoreResult<()>;

    /// Removes the stored session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the store cannot be written.
    fn clear(&self) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// The stored session could not be decoded.
    #[error("corrupt session data: {0}")]
    Corrupt(String),

    /// Storage failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
