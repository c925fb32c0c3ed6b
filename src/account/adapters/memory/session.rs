//! In-memory session store.

use std::sync::{Arc, RwLock};

use crate::account::{
    domain::Session,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Session store that forgets everything when dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Option<Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::storage(std::io::Error::other(err.to_string()))
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> SessionStoreResult<Option<Session>> {
        Ok(self.session.read().map_err(poisoned)?.clone())
    }

    fn save(&self, session: &Session) -> SessionStoreResult<()> {
        *self.session.write().map_err(poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> SessionStoreResult<()> {
        *self.session.write().map_err(poisoned)? = None;
        Ok(())
    }
}
