//! Local SQLite storage

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use tavern::DomainError;

/// Open (creating if needed) the database and apply migrations
pub async fn connect(database_url: &str) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DomainError::Repository(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| DomainError::Repository(format!("Failed to open database: {}", e)))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| DomainError::Repository(format!("Failed to run migrations: {}", e)))?;

    info!(database_url = %database_url, "✅ Database ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_characters_table() {
        let pool = connect("sqlite::memory:").await.unwrap();

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'characters'")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert_eq!(tables.len(), 1);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM characters")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let pool = connect("sqlite::memory:").await.unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    }
}
