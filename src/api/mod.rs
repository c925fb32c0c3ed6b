//! HTTP backend serving tasks and accounts as JSON.
//!
//! The router is generic over both repositories so the demo server can run
//! on in-memory storage while tests swap in their own.

mod accounts;
mod error;
mod tasks;

pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::account::{ports::UserRepository, services::AccountService};
use crate::board::ports::TaskRepository;

/// Shared handler state.
pub struct AppState<T, U>
where
    U: UserRepository,
{
    tasks: Arc<T>,
    accounts: AccountService<U>,
}

impl<T, U> AppState<T, U>
where
    U: UserRepository,
{
    /// Creates state over the two repositories.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>) -> Self {
        Self {
            tasks,
            accounts: AccountService::new(users),
        }
    }
}

impl<T, U> Clone for AppState<T, U>
where
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            accounts: self.accounts.clone(),
        }
    }
}

/// Builds the backend router with request tracing and permissive CORS.
pub fn router<T, U>(state: AppState<T, U>) -> Router
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/tasks", get(tasks::list::<T, U>).post(tasks::create::<T, U>))
        .route(
            "/tasks/{id}",
            put(tasks::replace::<T, U>).delete(tasks::remove::<T, U>),
        )
        .route("/login", post(accounts::login::<T, U>))
        .route("/register", post(accounts::register::<T, U>))
        .route("/users", get(accounts::list::<T, U>))
        .route("/users/{id}", put(accounts::update::<T, U>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
