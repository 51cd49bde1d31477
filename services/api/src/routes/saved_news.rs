//! Bookmark (saved news) endpoints

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{error::ApiError, middleware::AuthUser, state::AppState};

/// Request body for saving or unsaving an article
#[derive(Deserialize)]
pub struct SavedNewsRequest {
    pub news_id: Option<Uuid>,
}

/// List the caller's bookmarks
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let bookmarks = state.saved_news_repository.list_by_user(user.id).await?;
    Ok(Json(bookmarks))
}

/// Bookmark an article for the caller
///
/// Saving an already-saved article is not an error: it answers 200 with
/// the existing bookmark instead of 201.
pub async fn save(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<SavedNewsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let news_id = payload
        .news_id
        .ok_or_else(|| ApiError::BadRequest("news_id is required".to_string()))?;

    let (bookmark, was_created) = state.saved_news_repository.save(user.id, news_id).await?;

    let status = if was_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let message = if was_created {
        "News saved successfully"
    } else {
        "News already saved"
    };

    Ok((
        status,
        Json(json!({
            "message": message,
            "data": bookmark,
            "is_saved": true,
        })),
    ))
}

/// Remove the caller's bookmark of an article
pub async fn unsave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<SavedNewsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let news_id = payload
        .news_id
        .ok_or_else(|| ApiError::BadRequest("news_id is required".to_string()))?;

    state.saved_news_repository.unsave(user.id, news_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
