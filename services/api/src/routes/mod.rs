//! API service routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{middleware::auth_middleware, state::AppState};

pub mod auth;
pub mod comments;
pub mod news;
pub mod saved_news;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/news", get(news::list).post(news::create))
        .route("/my-news", get(news::my_news))
        .route(
            "/news/:id",
            get(news::get).put(news::update).delete(news::remove),
        )
        .route(
            "/comments",
            get(comments::list)
                .post(comments::create)
                .delete(comments::remove),
        )
        .route(
            "/saved-news",
            get(saved_news::list)
                .post(saved_news::save)
                .delete(saved_news::unsave),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "newsline-api"
    }))
}
