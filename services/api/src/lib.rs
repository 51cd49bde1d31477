//! newsline API service
//!
//! A news-sharing backend: registration and token login, article
//! publishing, comments, and per-user bookmarks, all over PostgreSQL.

pub mod authz;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod slug;
pub mod state;
pub mod validation;
