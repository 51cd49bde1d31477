//! Saved news (bookmark) model and related functionality

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Short article projection embedded in bookmark responses
#[derive(Debug, Clone, Serialize)]
pub struct NewsSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

/// A user's bookmark of a news article
#[derive(Debug, Clone, Serialize)]
pub struct SavedBookmark {
    pub id: Uuid,
    pub news: NewsSummary,
    pub saved_at: DateTime<Utc>,
}
