//! Saved news (bookmark) repository for database operations

use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewsSummary, SavedBookmark};

/// Saved news repository
#[derive(Clone)]
pub struct SavedNewsRepository {
    pool: PgPool,
}

impl SavedNewsRepository {
    /// Create a new saved news repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bookmark an article for a user
    ///
    /// Idempotent: the second save of the same (user, article) pair
    /// returns the existing bookmark with `was_created = false`. Two
    /// concurrent saves resolve in the database via the composite unique
    /// index; no constraint error escapes.
    pub async fn save(&self, user_id: Uuid, news_id: Uuid) -> ApiResult<(SavedBookmark, bool)> {
        let news_row = sqlx::query("SELECT id, title, slug FROM news WHERE id = $1")
            .bind(news_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::validation("news_id", "News item not found"))?;

        let news = NewsSummary {
            id: news_row.get("id"),
            title: news_row.get("title"),
            slug: news_row.get("slug"),
        };

        let inserted = sqlx::query(
            r#"
            INSERT INTO saved_news (user_id, news_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, news_id) DO NOTHING
            RETURNING id, saved_at
            "#,
        )
        .bind(user_id)
        .bind(news_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            info!("User {} saved article {}", user_id, news_id);
            let bookmark = SavedBookmark {
                id: row.get("id"),
                news,
                saved_at: row.get("saved_at"),
            };
            return Ok((bookmark, true));
        }

        // Already saved, possibly by a concurrent request. Return the
        // existing row; it can also have been cascade-deleted in the
        // meantime, which reads as a missing bookmark rather than a
        // query failure.
        let row = sqlx::query(
            "SELECT id, saved_at FROM saved_news WHERE user_id = $1 AND news_id = $2",
        )
        .bind(user_id)
        .bind(news_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => ApiError::NotFound("Bookmark".to_string()),
            _ => ApiError::from(e),
        })?;

        let bookmark = SavedBookmark {
            id: row.get("id"),
            news,
            saved_at: row.get("saved_at"),
        };

        Ok((bookmark, false))
    }

    /// List a user's bookmarks, newest first, joined with an article
    /// summary
    pub async fn list_by_user(&self, user_id: Uuid) -> ApiResult<Vec<SavedBookmark>> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.saved_at, n.id AS news_id, n.title, n.slug
            FROM saved_news s
            JOIN news n ON n.id = s.news_id
            WHERE s.user_id = $1
            ORDER BY s.saved_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let bookmarks = rows
            .into_iter()
            .map(|row| SavedBookmark {
                id: row.get("id"),
                news: NewsSummary {
                    id: row.get("news_id"),
                    title: row.get("title"),
                    slug: row.get("slug"),
                },
                saved_at: row.get("saved_at"),
            })
            .collect();

        Ok(bookmarks)
    }

    /// Remove a user's bookmark of an article
    pub async fn unsave(&self, user_id: Uuid, news_id: Uuid) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM saved_news WHERE user_id = $1 AND news_id = $2")
            .bind(user_id)
            .bind(news_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Bookmark".to_string()));
        }

        Ok(())
    }
}
