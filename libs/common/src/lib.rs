//! Common library for the newsline backend
//!
//! This crate provides shared infrastructure used by the API service:
//! database connectivity and the database error types.

pub mod database;
pub mod error;
