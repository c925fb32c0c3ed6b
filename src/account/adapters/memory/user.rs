//! In-memory user repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Email, UserAccount, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<Vec<UserAccount>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `accounts`.
    #[must_use]
    pub fn with_accounts(accounts: impl IntoIterator<Item = UserAccount>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts.into_iter().collect())),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<UserAccount>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.iter().find(|account| account.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<UserAccount>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|account| &account.user().email == email)
            .cloned())
    }

    async fn save(&self, account: &UserAccount) -> UserRepositoryResult<()> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let email = &account.user().email;
        if accounts
            .iter()
            .any(|existing| &existing.user().email == email && existing.id() != account.id())
        {
            return Err(UserRepositoryError::DuplicateEmail(email.clone()));
        }
        match accounts.iter_mut().find(|existing| existing.id() == account.id()) {
            Some(slot) => *slot = account.clone(),
            None => accounts.push(account.clone()),
        }
        Ok(())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<UserAccount>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.clone())
    }
}
