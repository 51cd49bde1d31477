//! Registration and login endpoints

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    error::ApiError,
    models::NewUser,
    state::AppState,
    validation::{validate_email, validate_password, validate_username},
};

/// Request for user registration
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response carrying a freshly issued token
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Register a new user and issue a token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Registration attempt for user: {}", payload.username);

    validate_username(&payload.username).map_err(|m| ApiError::validation("username", &m))?;
    validate_password(&payload.password).map_err(|m| ApiError::validation("password", &m))?;
    if let Some(email) = payload.email.as_deref().filter(|e| !e.is_empty()) {
        validate_email(email).map_err(|m| ApiError::validation("email", &m))?;
    }

    let new_user = NewUser {
        username: payload.username,
        email: payload.email.filter(|e| !e.is_empty()),
        password: payload.password,
    };

    let user = state.user_repository.create(&new_user).await?;

    let token = state.jwt_service.issue_token(&user).map_err(|e| {
        error!("Failed to issue token: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// Authenticate credentials and issue a token
///
/// Missing user, inactive account, and password mismatch all collapse
/// into the same error so the response does not leak which usernames
/// exist.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Login attempt for user: {}", payload.username);

    let invalid = || ApiError::BadRequest("Invalid username or password.".to_string());

    let user = state
        .user_repository
        .find_by_username(&payload.username)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(invalid)?;

    if !state.user_repository.verify_password(&user, &payload.password)? {
        return Err(invalid());
    }

    let token = state.jwt_service.issue_token(&user).map_err(|e| {
        error!("Failed to issue token: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::OK, Json(TokenResponse { token })))
}
