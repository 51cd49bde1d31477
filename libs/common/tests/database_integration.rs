//! Integration tests for the database infrastructure
//!
//! These tests verify that PostgreSQL is reachable through `DATABASE_URL`
//! and that the pool answers queries. Ignored by default; run with:
//!
//! ```text
//! cargo test -p common -- --ignored
//! ```

use common::database::{DatabaseConfig, health_check, init_pool};
use sqlx::Row;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn pool_connects_and_answers_queries() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_pool(&config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;
    let result: i32 = row.get("result");
    assert_eq!(result, 1);

    Ok(())
}
