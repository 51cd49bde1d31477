//! Application state shared across handlers

use sqlx::PgPool;

use crate::jwt::JwtService;
use crate::repositories::{CommentRepository, NewsRepository, SavedNewsRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub news_repository: NewsRepository,
    pub comment_repository: CommentRepository,
    pub saved_news_repository: SavedNewsRepository,
}

impl AppState {
    /// Build the full application state on top of a connection pool
    pub fn new(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            news_repository: NewsRepository::new(pool.clone()),
            comment_repository: CommentRepository::new(pool.clone()),
            saved_news_repository: SavedNewsRepository::new(pool.clone()),
            db_pool: pool,
            jwt_service,
        }
    }
}
