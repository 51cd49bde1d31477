//! Comment repository for database operations

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{Comment, PublicUser};

fn comment_from_row(row: &PgRow) -> Comment {
    Comment {
        id: row.get("id"),
        news: row.get("news_id"),
        user: PublicUser {
            id: row.get("user_id"),
            username: row.get("username"),
        },
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

/// Comment repository
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List comments on an article, newest first
    pub async fn list_by_news(&self, news_id: Uuid) -> ApiResult<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.news_id, c.user_id, c.content, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.news_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(news_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(comment_from_row).collect())
    }

    /// Create a comment on an article
    pub async fn create(&self, news_id: Uuid, user_id: Uuid, content: &str) -> ApiResult<Comment> {
        if content.trim().is_empty() {
            return Err(ApiError::validation("content", "Content cannot be empty."));
        }

        info!("User {} commenting on article {}", user_id, news_id);

        let row = sqlx::query(
            r#"
            WITH inserted AS (
                INSERT INTO comments (news_id, user_id, content)
                VALUES ($1, $2, $3)
                RETURNING id, news_id, user_id, content, created_at
            )
            SELECT c.id, c.news_id, c.user_id, c.content, c.created_at, u.username
            FROM inserted c
            JOIN users u ON u.id = c.user_id
            "#,
        )
        .bind(news_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                ApiError::validation("news", "News item not found")
            }
            _ => ApiError::from(e),
        })?;

        Ok(comment_from_row(&row))
    }

    /// Find a comment by ID
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<Comment>> {
        let row = sqlx::query(
            r#"
            SELECT c.id, c.news_id, c.user_id, c.content, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(comment_from_row))
    }

    /// Delete a comment
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Comment".to_string()));
        }

        Ok(())
    }
}
