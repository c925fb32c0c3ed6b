//! Repository port for stored accounts.

use crate::account::domain::{Email, UserAccount, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// Account persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds an account by identifier.
    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<UserAccount>>;

    /// Finds an account by login email.
    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<UserAccount>>;

    /// Inserts or replaces an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateEmail`] when another account
    /// already uses the email.
    async fn save(&self, account: &UserAccount) -> UserRepositoryResult<()>;

    /// Returns every account in registration order.
    async fn list(&self) -> UserRepositoryResult<Vec<UserAccount>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Another account already uses the email.
    #[error("email already registered: {0}")]
    DuplicateEmail(Email),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
