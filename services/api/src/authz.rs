//! Ownership checks for mutating operations
//!
//! Stateless predicates evaluated before any repository mutation. A
//! violation surfaces as 403; existence of the resource is not hidden
//! from authenticated actors.

use uuid::Uuid;

use crate::models::{Comment, NewsArticle};

/// Only the article's author may edit or delete it
pub fn can_modify_news(article: &NewsArticle, actor: Uuid) -> bool {
    article.author.id == actor
}

/// Only the comment's author may delete it
pub fn can_delete_comment(comment: &Comment, actor: Uuid) -> bool {
    comment.user.id == actor
}
