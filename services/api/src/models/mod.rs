//! API service models

pub mod comment;
pub mod news;
pub mod saved_news;
pub mod user;

// Re-export for convenience
pub use comment::Comment;
pub use news::{NewNews, NewsArticle, NewsKey, UpdateNews};
pub use saved_news::{NewsSummary, SavedBookmark};
pub use user::{NewUser, PublicUser, User};
