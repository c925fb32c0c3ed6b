//! `/login`, `/register`, and `/users` handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::{ApiError, AppState};
use crate::account::{
    domain::{AuthResponse, LoginBody, Registration, User, UserId, UserUpdate},
    ports::UserRepository,
};
use crate::board::ports::TaskRepository;

pub(super) async fn login<T, U>(
    State(state): State<AppState<T, U>>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthResponse>, ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    let grant = state.accounts.login(&body.email, &body.password).await?;
    Ok(Json(AuthResponse::granted(grant)))
}

pub(super) async fn register<T, U>(
    State(state): State<AppState<T, U>>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    let grant = state.accounts.register(registration).await?;
    Ok((StatusCode::CREATED, Json(AuthResponse::granted(grant))))
}

pub(super) async fn update<T, U>(
    State(state): State<AppState<T, U>>,
    Path(id): Path<String>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<AuthResponse>, ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    let user = state.accounts.update_user(&UserId::new(id), update).await?;
    Ok(Json(AuthResponse::updated(user)))
}

pub(super) async fn list<T, U>(
    State(state): State<AppState<T, U>>,
) -> Result<Json<Vec<User>>, ApiError>
where
    T: TaskRepository + 'static,
    U: UserRepository + 'static,
{
    Ok(Json(state.accounts.list_users().await?))
}
