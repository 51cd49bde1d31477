//! News article model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::PublicUser;

/// News article entity, joined with its author's public identity
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author: PublicUser,
    pub content: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    /// Whether the requesting user has bookmarked this article
    pub is_saved: bool,
}

/// New article creation payload
#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub author_id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub is_published: bool,
}

/// Partial article update payload
///
/// Only supplied fields change; slug and timestamps are never
/// caller-settable.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateNews {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_published: Option<bool>,
}

/// Lookup key for a news article: by id or by slug
#[derive(Debug, Clone)]
pub enum NewsKey {
    Id(Uuid),
    Slug(String),
}
