//! HTTP client for the backend collaborator.
//!
//! [`BackendClient`] is a thin JSON wrapper around `reqwest` shared by the
//! REST task repository and the REST account client. It does not retry;
//! every failure is returned to the caller to be shown to the user.

use reqwest::{Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors returned while talking to the backend collaborator.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be decoded.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend has no resource at the requested path.
    #[error("backend resource not found: {0}")]
    NotFound(String),

    /// The configured base URL cannot carry a request path.
    #[error("invalid backend base URL {base_url}: {reason}")]
    BaseUrl {
        /// Configured base URL.
        base_url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The backend answered with an unexpected status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },
}

/// Result type for backend client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// JSON client bound to a backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for `base_url` with a default `reqwest` client.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest` client.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            http,
            base_url: raw.trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `segments` against the base URL. Each segment is
    /// percent-encoded, so identifiers containing `/`, `?` or `#` stay a
    /// single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] when the base URL does not parse or
    /// cannot be a base.
    pub fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let invalid = |reason: String| ClientError::BaseUrl {
            base_url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".to_owned()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a `GET` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a 404, or any other
    /// non-success status.
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.url(segments)?;
        let response = self.http.get(url.clone()).send().await?;
        decode(&url, response).await
    }

    /// Sends `body` as JSON with `method` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a 404, or any other
    /// non-success status.
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        tracing::debug!(%method, %url, "backend request");
        let response = self
            .http
            .request(method, url.clone())
            .json(body)
            .send()
            .await?;
        decode(&url, response).await
    }

    /// Sends `body` as JSON and decodes the response body whatever the
    /// status, for endpoints that report failures inside a JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on transport failure and
    /// [`ClientError::Status`] when the body is not the expected JSON.
    pub async fn exchange_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        tracing::debug!(%method, %url, "backend request");
        let response = self
            .http
            .request(method, url)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|_| ClientError::Status {
            status: status.as_u16(),
            body: text,
        })
    }

    /// Issues a `DELETE`. Returns `false` when the backend answers 404.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or any non-success
    /// status other than 404.
    pub async fn delete(&self, segments: &[&str]) -> ClientResult<bool> {
        let response = self.http.delete(self.url(segments)?).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(ClientError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

async fn decode<T: DeserializeOwned>(url: &Url, response: reqwest::Response) -> ClientResult<T> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(url.path().to_owned())),
        status if status.is_success() => Ok(response.json().await?),
        status => Err(ClientError::Status {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}
