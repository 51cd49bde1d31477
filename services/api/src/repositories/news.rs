//! News repository for database operations

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewNews, NewsArticle, NewsKey, PublicUser, UpdateNews};
use crate::slug::slugify;

const ARTICLE_COLUMNS: &str = r#"
    n.id, n.title, n.slug, n.content, n.image, n.is_published,
    n.published_at, n.updated_at,
    u.id AS author_id, u.username AS author_username,
    EXISTS(
        SELECT 1 FROM saved_news s
        WHERE s.user_id = $1 AND s.news_id = n.id
    ) AS is_saved
"#;

fn article_from_row(row: &PgRow) -> NewsArticle {
    NewsArticle {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        author: PublicUser {
            id: row.get("author_id"),
            username: row.get("author_username"),
        },
        content: row.get("content"),
        image: row.get("image"),
        published_at: row.get("published_at"),
        updated_at: row.get("updated_at"),
        is_published: row.get("is_published"),
        is_saved: row.get("is_saved"),
    }
}

/// News repository
#[derive(Clone)]
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    /// Create a new news repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new article
    ///
    /// The slug is derived from the title once, here, and never
    /// recomputed. A slug collision surfaces as a creation failure.
    pub async fn create(&self, new_news: &NewNews) -> ApiResult<NewsArticle> {
        if new_news.content.trim().is_empty() {
            return Err(ApiError::validation("content", "Content cannot be empty."));
        }

        let slug = slugify(&new_news.title);
        info!("Creating article '{}' with slug '{}'", new_news.title, slug);

        let row = sqlx::query(
            r#"
            WITH inserted AS (
                INSERT INTO news (title, slug, author_id, content, image, is_published)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, title, slug, author_id, content, image, is_published,
                          published_at, updated_at
            )
            SELECT n.id, n.title, n.slug, n.content, n.image, n.is_published,
                   n.published_at, n.updated_at,
                   u.id AS author_id, u.username AS author_username,
                   FALSE AS is_saved
            FROM inserted n
            JOIN users u ON u.id = n.author_id
            "#,
        )
        .bind(&new_news.title)
        .bind(&slug)
        .bind(new_news.author_id)
        .bind(&new_news.content)
        .bind(&new_news.image)
        .bind(new_news.is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::validation("title", "An article with this title already exists.")
            }
            _ => ApiError::from(e),
        })?;

        Ok(article_from_row(&row))
    }

    /// Find an article by id or slug, with `is_saved` computed for the
    /// requesting user
    pub async fn find(&self, key: &NewsKey, requester: Uuid) -> ApiResult<Option<NewsArticle>> {
        let query = match key {
            NewsKey::Id(_) => format!(
                "SELECT {ARTICLE_COLUMNS} FROM news n JOIN users u ON u.id = n.author_id WHERE n.id = $2"
            ),
            NewsKey::Slug(_) => format!(
                "SELECT {ARTICLE_COLUMNS} FROM news n JOIN users u ON u.id = n.author_id WHERE n.slug = $2"
            ),
        };

        let row = match key {
            NewsKey::Id(id) => {
                sqlx::query(&query)
                    .bind(requester)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            NewsKey::Slug(slug) => {
                sqlx::query(&query)
                    .bind(requester)
                    .bind(slug)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };

        Ok(row.as_ref().map(article_from_row))
    }

    /// List published articles, newest first
    pub async fn list_published(&self, requester: Uuid) -> ApiResult<Vec<NewsArticle>> {
        let query = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM news n
            JOIN users u ON u.id = n.author_id
            WHERE n.is_published = TRUE
            ORDER BY n.published_at DESC
            "#
        );

        let rows = sqlx::query(&query)
            .bind(requester)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(article_from_row).collect())
    }

    /// List all of an author's articles regardless of publication flag,
    /// newest first
    pub async fn list_by_author(&self, author_id: Uuid) -> ApiResult<Vec<NewsArticle>> {
        let query = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM news n
            JOIN users u ON u.id = n.author_id
            WHERE n.author_id = $1
            ORDER BY n.published_at DESC
            "#
        );

        let rows = sqlx::query(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(article_from_row).collect())
    }

    /// Apply a partial update to an article
    ///
    /// Only supplied fields change; the slug is immutable and
    /// `updated_at` is bumped by the query itself.
    pub async fn update(
        &self,
        article: &NewsArticle,
        changes: &UpdateNews,
    ) -> ApiResult<NewsArticle> {
        if let Some(content) = &changes.content {
            if content.trim().is_empty() {
                return Err(ApiError::validation("content", "Content cannot be empty."));
            }
        }

        let row = sqlx::query(
            r#"
            UPDATE news SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                image = COALESCE($4, image),
                is_published = COALESCE($5, is_published),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, slug, content, image, is_published, published_at, updated_at
            "#,
        )
        .bind(article.id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(&changes.image)
        .bind(changes.is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The article can vanish between the ownership lookup and
            // the update.
            sqlx::Error::RowNotFound => ApiError::NotFound("News".to_string()),
            _ => ApiError::from(e),
        })?;

        Ok(NewsArticle {
            id: row.get("id"),
            title: row.get("title"),
            slug: row.get("slug"),
            author: article.author.clone(),
            content: row.get("content"),
            image: row.get("image"),
            published_at: row.get("published_at"),
            updated_at: row.get("updated_at"),
            is_published: row.get("is_published"),
            is_saved: article.is_saved,
        })
    }

    /// Delete an article; comments and bookmarks cascade in the database
    pub async fn delete(&self, key: &NewsKey) -> ApiResult<()> {
        let result = match key {
            NewsKey::Id(id) => {
                sqlx::query("DELETE FROM news WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            NewsKey::Slug(slug) => {
                sqlx::query("DELETE FROM news WHERE slug = $1")
                    .bind(slug)
                    .execute(&self.pool)
                    .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("News".to_string()));
        }

        Ok(())
    }
}
