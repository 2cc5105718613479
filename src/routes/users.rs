use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::constants::{ERR_INVALID_EMAIL, ERR_NAME_REQUIRED, ERR_PASSWORD_REQUIRED};
use crate::error::{AppError, Result};
use crate::models::{User, UserIdentity};
use crate::routes::validation::{ensure, AppJson};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserIdentity,
}

/// Register a new user
///
/// The password is stored as a salted bcrypt hash and never returned.
///
/// Returns 409 Conflict if the email is already registered.
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let name = payload.name.trim();
    let email = payload.email.trim();

    ensure(User::validate_name(name), ERR_NAME_REQUIRED)?;
    ensure(User::validate_email(email), ERR_INVALID_EMAIL)?;
    ensure(User::validate_password(&payload.password), ERR_PASSWORD_REQUIRED)?;

    if state.users.find_by_email(email).await?.is_some() {
        tracing::info!("Registration rejected: email already registered");
        return Err(AppError::EmailTaken);
    }

    let password_hash = hash_password(payload.password, state.config.bcrypt_cost).await?;
    let record = state.users.create(name, email, &password_hash).await?;

    tracing::info!(user_id = record.id, "New user registered");

    Ok((StatusCode::CREATED, Json(record.into_public())))
}

/// Exchange credentials for a session token
///
/// An unknown email and a wrong password produce the same 401 response.
pub async fn login_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = payload.email.trim();

    ensure(User::validate_email(email), ERR_INVALID_EMAIL)?;
    ensure(User::validate_password(&payload.password), ERR_PASSWORD_REQUIRED)?;

    let Some(record) = state.users.find_by_email(email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(payload.password, record.password_hash.clone()).await? {
        tracing::warn!(user_id = record.id, "Login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let identity = UserIdentity::from(&record);
    let token = state.tokens.issue(&identity)?;

    tracing::info!(user_id = record.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: identity,
    }))
}

/// Profile of the token holder, read from storage rather than the token
pub async fn current_user(State(state): State<AppState>, user: AuthUser) -> Result<Json<User>> {
    let record = state
        .users
        .find_by_id(user.id())
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(record.into_public()))
}
