//! Repositories for database operations

pub mod comment;
pub mod news;
pub mod saved_news;
pub mod user;

pub use comment::CommentRepository;
pub use news::NewsRepository;
pub use saved_news::SavedNewsRepository;
pub use user::UserRepository;
