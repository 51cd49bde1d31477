//! Comment model and related functionality

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::user::PublicUser;

/// Comment entity, joined with its author's public identity
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub news: Uuid,
    pub user: PublicUser,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
