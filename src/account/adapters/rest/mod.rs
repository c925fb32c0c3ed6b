//! Account client for the backend collaborator's auth and user endpoints.

use reqwest::Method;
use thiserror::Error;

use crate::account::domain::{
    AccountDomainError, AuthGrant, AuthResponse, LoginBody, RegisterRequest, User, UserId,
    UserUpdate,
};
use crate::client::{BackendClient, ClientError};

/// Errors returned by [`RestAccountClient`].
#[derive(Debug, Error)]
pub enum AccountClientError {
    /// Input failed validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] AccountDomainError),
    /// The backend refused the request with a user-facing message.
    #[error("{0}")]
    Rejected(String),
    /// The backend could not be reached or answered unexpectedly.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type for account client operations.
pub type AccountClientResult<T> = Result<T, AccountClientError>;

/// Talks to `/login`, `/register`, and `/users`.
#[derive(Debug, Clone)]
pub struct RestAccountClient {
    client: BackendClient,
}

impl RestAccountClient {
    /// Creates an account client using `client`.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Logs in.
    ///
    /// # Errors
    ///
    /// Returns [`AccountClientError::Rejected`] for bad credentials or
    /// [`AccountClientError::Client`] when the backend is unreachable.
    pub async fn login(&self, email: &str, password: &str) -> AccountClientResult<AuthGrant> {
        let body = LoginBody {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response: AuthResponse = self
            .client
            .exchange_json(Method::POST, &["login"], &body)
            .await?;
        into_grant(response)
    }

    /// Validates the form locally, then registers.
    ///
    /// # Errors
    ///
    /// Returns [`AccountClientError::Invalid`] before sending when the form
    /// is invalid, [`AccountClientError::Rejected`] when the backend refuses,
    /// or [`AccountClientError::Client`] when the backend is unreachable.
    pub async fn register(&self, request: RegisterRequest) -> AccountClientResult<AuthGrant> {
        let registration = request.validate()?;
        let response: AuthResponse = self
            .client
            .exchange_json(Method::POST, &["register"], &registration)
            .await?;
        into_grant(response)
    }

    /// Updates a profile.
    ///
    /// # Errors
    ///
    /// Returns [`AccountClientError::Rejected`] when the backend refuses or
    /// [`AccountClientError::Client`] when the backend is unreachable.
    pub async fn update_user(&self, id: &UserId, update: &UserUpdate) -> AccountClientResult<User> {
        let response: AuthResponse = self
            .client
            .exchange_json(Method::PUT, &["users", id.as_str()], update)
            .await?;
        match response {
            AuthResponse {
                success: true,
                user: Some(user),
                ..
            } => Ok(user),
            other => Err(rejection(other)),
        }
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountClientError::Client`] when the backend is
    /// unreachable or answers unexpectedly.
    pub async fn list_users(&self) -> AccountClientResult<Vec<User>> {
        Ok(self.client.get_json(&["users"]).await?)
    }
}

fn into_grant(response: AuthResponse) -> AccountClientResult<AuthGrant> {
    match response {
        AuthResponse {
            success: true,
            user: Some(user),
            token: Some(token),
            ..
        } => Ok(AuthGrant { user, token }),
        other => Err(rejection(other)),
    }
}

fn rejection(response: AuthResponse) -> AccountClientError {
    AccountClientError::Rejected(
        response
            .message
            .unwrap_or_else(|| "request was rejected".to_owned()),
    )
}
