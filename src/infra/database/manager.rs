use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Collections the repositories write to. Every statement is idempotent so
/// bootstrap can run on each start.
const BOOTSTRAP_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS accounts (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        access_token TEXT,
        role TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS accounts_email_key ON accounts (email)",
    "CREATE INDEX IF NOT EXISTS accounts_access_token_idx ON accounts (access_token)",
    "CREATE TABLE IF NOT EXISTS surveys (
        id UUID PRIMARY KEY,
        question TEXT NOT NULL,
        answers JSONB NOT NULL,
        date TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS errors (
        id UUID PRIMARY KEY,
        stack TEXT NOT NULL,
        date TIMESTAMPTZ NOT NULL
    )",
];

/// Connection pool lifecycle for the application database
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a pool sized and timed from config
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        if !Self::is_postgres_url(&config.url) {
            return Err(DatabaseError::InvalidDatabaseUrl);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.url)
            .await?;

        info!(
            "Created database pool (max {} connections)",
            config.max_connections
        );
        Ok(pool)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Create missing collections and indexes
    pub async fn bootstrap(pool: &PgPool) -> Result<(), DatabaseError> {
        for statement in BOOTSTRAP_STATEMENTS {
            sqlx::query(statement).execute(pool).await?;
        }
        info!("Database collections ready");
        Ok(())
    }

    pub async fn close(pool: PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }

    fn is_postgres_url(url: &str) -> bool {
        url.starts_with("postgres://") || url.starts_with("postgresql://")
    }
}
