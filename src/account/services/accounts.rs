//! Account registration, login, and profile updates.

use crate::account::{
    domain::{
        AccountDomainError, AuthGrant, Color, Email, PasswordHash, Registration, SessionToken,
        User, UserAccount, UserId, UserUpdate,
    },
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for account operations.
///
/// The display strings of the first three variants are shown to users
/// verbatim.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email and password do not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The email is already registered.
    #[error("User already exists")]
    EmailTaken,
    /// No account has the identifier.
    #[error("User not found")]
    UserNotFound(UserId),
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for AccountError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateEmail(_) => Self::EmailTaken,
            other @ UserRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for account service operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Account orchestration service backing the `/login`, `/register`, and
/// `/users` endpoints.
pub struct AccountService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for AccountService<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    /// Creates an account service over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new account with a random color and placeholder avatar.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::EmailTaken`] when the email is registered,
    /// [`AccountError::Domain`] when a field is invalid, or
    /// [`AccountError::Repository`] when persistence fails.
    pub async fn register(&self, registration: Registration) -> AccountResult<AuthGrant> {
        if self
            .repository
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailTaken);
        }
        let password = PasswordHash::create(&registration.password)?;
        let user = User::new(
            UserId::generate(),
            registration.name,
            registration.email,
            registration.role,
            Color::random(),
        )?;
        self.repository
            .save(&UserAccount::new(user.clone(), password))
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "account registered");
        Ok(AuthGrant {
            user,
            token: SessionToken::generate(),
        })
    }

    /// Checks credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] for a malformed or
    /// unknown email or a wrong password, or [`AccountError::Repository`]
    /// when lookup fails.
    pub async fn login(&self, email: &str, password: &str) -> AccountResult<AuthGrant> {
        let email = Email::new(email).map_err(|_| AccountError::InvalidCredentials)?;
        let account = self
            .repository
            .find_by_email(&email)
            .await?
            .filter(|account| account.verify_password(password))
            .ok_or(AccountError::InvalidCredentials)?;
        tracing::debug!(user_id = %account.id(), "login succeeded");
        Ok(AuthGrant {
            user: account.user().clone(),
            token: SessionToken::generate(),
        })
    }

    /// Applies a partial profile update. An absent or empty password keeps
    /// the current one.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::UserNotFound`] for an unknown id,
    /// [`AccountError::EmailTaken`] when the new email belongs to another
    /// account, [`AccountError::Domain`] when a field is invalid, or
    /// [`AccountError::Repository`] when persistence fails.
    pub async fn update_user(&self, id: &UserId, update: UserUpdate) -> AccountResult<User> {
        let mut account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::UserNotFound(id.clone()))?;
        account.apply_update(update)?;
        self.repository.save(&account).await?;
        Ok(account.user().clone())
    }

    /// Returns every registered profile.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Repository`] when lookup fails.
    pub async fn list_users(&self) -> AccountResult<Vec<User>> {
        Ok(self
            .repository
            .list()
            .await?
            .into_iter()
            .map(|account| account.user().clone())
            .collect())
    }
}
