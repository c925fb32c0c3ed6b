//! Client-side session lifecycle.

use crate::account::{
    domain::{AuthGrant, SESSION_TTL_DAYS, Session, User},
    ports::{SessionStore, SessionStoreResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Keeps the local client's session, expiring it after a fixed number of
/// days.
#[derive(Clone)]
pub struct SessionManager<S, C>
where
    S: SessionStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    ttl_days: u32,
}

impl<S, C> SessionManager<S, C>
where
    S: SessionStore,
    C: Clock + Send + Sync,
{
    /// Creates a manager using the default seven-day lifetime.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_ttl_days(store, clock, SESSION_TTL_DAYS)
    }

    /// Creates a manager with a custom lifetime.
    #[must_use]
    pub const fn with_ttl_days(store: Arc<S>, clock: Arc<C>, ttl_days: u32) -> Self {
        Self {
            store,
            clock,
            ttl_days,
        }
    }

    /// Starts and stores a session for a successful login or registration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::account::ports::SessionStoreError`] when the session
    /// cannot be stored.
    pub fn begin(&self, grant: AuthGrant) -> SessionStoreResult<Session> {
        let session = Session::begin(grant.token, grant.user, self.ttl_days, &*self.clock);
        self.store.save(&session)?;
        tracing::debug!(user_id = %session.user().id, expires_at = %session.expires_at(), "session started");
        Ok(session)
    }

    /// Returns the live session, clearing it first when it has expired.
    ///
    /// # Errors
    ///
    /// Returns [`crate::account::ports::SessionStoreError`] when the store
    /// cannot be read or cleared.
    pub fn current(&self) -> SessionStoreResult<Option<Session>> {
        match self.store.load()? {
            Some(session) if session.is_expired(&*self.clock) => {
                tracing::debug!(user_id = %session.user().id, "session expired");
                self.store.clear()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Returns the signed-in user, if the session is live.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::current`].
    pub fn current_user(&self) -> SessionStoreResult<Option<User>> {
        Ok(self.current()?.map(|session| session.user().clone()))
    }

    /// Returns `true` when a live session exists.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::current`].
    pub fn is_authenticated(&self) -> SessionStoreResult<bool> {
        Ok(self.current()?.is_some())
    }

    /// Replaces the stored profile after a profile update, keeping the
    /// expiry. Does nothing without a live session.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::current`].
    pub fn refresh_user(&self, user: User) -> SessionStoreResult<Option<Session>> {
        let Some(mut session) = self.current()? else {
            return Ok(None);
        };
        session.refresh_user(user);
        self.store.save(&session)?;
        Ok(Some(session))
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::account::ports::SessionStoreError`] when the store
    /// cannot be cleared.
    pub fn logout(&self) -> SessionStoreResult<()> {
        self.store.clear()
    }
}
