//! Client sessions.

use super::User;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Days a session stays valid after login or registration.
pub const SESSION_TTL_DAYS: u32 = 7;

/// Opaque bearer token identifying a session.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Creates a new random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an existing token string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// An authenticated session: the token, the profile, and when it lapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    token: SessionToken,
    user: User,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `user` lasting `ttl_days` from now.
    #[must_use]
    pub fn begin(token: SessionToken, user: User, ttl_days: u32, clock: &impl Clock) -> Self {
        Self {
            token,
            user,
            expires_at: clock.utc() + TimeDelta::days(i64::from(ttl_days)),
        }
    }

    /// Returns the token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the profile.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the expiry instant.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` once the expiry instant has passed.
    #[must_use]
    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        clock.utc() >= self.expires_at
    }

    /// Replaces the stored profile, keeping token and expiry.
    pub fn refresh_user(&mut self, user: User) {
        self.user = user;
    }
}

/// Proof of a successful login or registration, before the client turns it
/// into a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    /// Authenticated profile.
    pub user: User,
    /// Token issued for the profile.
    pub token: SessionToken,
}
