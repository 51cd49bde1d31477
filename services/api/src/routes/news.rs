//! News article endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    authz::can_modify_news,
    error::ApiError,
    middleware::AuthUser,
    models::{NewNews, NewsKey, UpdateNews},
    state::AppState,
    validation::validate_title,
};

/// Request body for article creation
#[derive(Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

/// List published articles, with the caller's `is_saved` flag on each
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let articles = state.news_repository.list_published(user.id).await?;
    Ok(Json(articles))
}

/// Create an article authored by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateNewsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_title(&payload.title).map_err(|m| ApiError::validation("title", &m))?;

    let new_news = NewNews {
        title: payload.title,
        author_id: user.id,
        content: payload.content,
        image: payload.image,
        is_published: payload.is_published,
    };

    let article = state.news_repository.create(&new_news).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// List all of the caller's own articles, published or not
pub async fn my_news(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let articles = state.news_repository.list_by_author(user.id).await?;
    Ok(Json(articles))
}

/// Fetch a single article by id
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .news_repository
        .find(&NewsKey::Id(id), user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("News".to_string()))?;

    Ok(Json(article))
}

/// Partially update an article; author only
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateNews>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .news_repository
        .find(&NewsKey::Id(id), user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("News".to_string()))?;

    if !can_modify_news(&article, user.id) {
        return Err(ApiError::PermissionDenied(
            "You cannot edit this news.".to_string(),
        ));
    }

    if let Some(title) = &changes.title {
        validate_title(title).map_err(|m| ApiError::validation("title", &m))?;
    }

    let updated = state.news_repository.update(&article, &changes).await?;
    Ok(Json(updated))
}

/// Delete an article; author only. Comments and bookmarks cascade.
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .news_repository
        .find(&NewsKey::Id(id), user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("News".to_string()))?;

    if !can_modify_news(&article, user.id) {
        return Err(ApiError::PermissionDenied(
            "You cannot delete this news.".to_string(),
        ));
    }

    state.news_repository.delete(&NewsKey::Id(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
