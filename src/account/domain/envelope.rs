//! Auth request and response bodies shared by the backend and its clients.
//!
//! Users travel in their domain serialization; only the auth exchanges need
//! dedicated envelope types.

use super::{AuthGrant, SessionToken, User};
use serde::{Deserialize, Serialize};

/// `POST /login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginBody {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Envelope returned by `/login`, `/register`, and `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Resulting profile on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Token issued by login or registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<SessionToken>,
    /// User-facing failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Success envelope for a login or registration.
    #[must_use]
    pub fn granted(grant: AuthGrant) -> Self {
        Self {
            success: true,
            user: Some(grant.user),
            token: Some(grant.token),
            message: None,
        }
    }

    /// Success envelope for a profile update.
    #[must_use]
    pub const fn updated(user: User) -> Self {
        Self {
            success: true,
            user: Some(user),
            token: None,
            message: None,
        }
    }

    /// Failure envelope carrying a user-facing message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            token: None,
            message: Some(message.into()),
        }
    }
}
