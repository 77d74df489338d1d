use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::data::protocols::LogErrorRepository;

/// Persists server-fault traces to the `errors` collection
#[derive(Clone)]
pub struct LogPgRepository {
    pool: PgPool,
}

impl LogPgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogErrorRepository for LogPgRepository {
    async fn log_error(&self, stack: &str) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO errors (id, stack, date) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(stack)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .context("failed to store error log")?;

        Ok(())
    }
}
