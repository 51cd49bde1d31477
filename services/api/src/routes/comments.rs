//! Comment endpoints

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    authz::can_delete_comment,
    error::ApiError,
    middleware::AuthUser,
    state::AppState,
    validation::validate_content,
};

/// Query parameters for listing comments
#[derive(Deserialize)]
pub struct ListQuery {
    pub news_id: Option<Uuid>,
}

/// Request body for comment creation
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub news: Uuid,
    pub content: String,
}

/// Request body for comment deletion
#[derive(Deserialize)]
pub struct DeleteCommentRequest {
    pub comment_id: Option<Uuid>,
}

/// List comments on an article, newest first
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let news_id = query
        .news_id
        .ok_or_else(|| ApiError::BadRequest("news_id is required".to_string()))?;

    let comments = state.comment_repository.list_by_news(news_id).await?;
    Ok(Json(comments))
}

/// Comment on an article as the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_content(&payload.content).map_err(|m| ApiError::validation("content", &m))?;

    let comment = state
        .comment_repository
        .create(payload.news, user.id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Delete a comment; commenter only
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<DeleteCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment_id = payload
        .comment_id
        .ok_or_else(|| ApiError::BadRequest("comment_id is required".to_string()))?;

    let comment = state
        .comment_repository
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment".to_string()))?;

    if !can_delete_comment(&comment, user.id) {
        return Err(ApiError::PermissionDenied(
            "You cannot delete this comment.".to_string(),
        ));
    }

    state.comment_repository.delete(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
