use anyhow::Context;
use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::data::protocols::AddSurveyRepository;
use crate::domain::AddSurveyModel;

#[derive(Clone)]
pub struct SurveyPgRepository {
    pool: PgPool,
}

impl SurveyPgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddSurveyRepository for SurveyPgRepository {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO surveys (id, question, answers, date) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::new_v4())
            .bind(&survey.question)
            .bind(Json(&survey.answers))
            .bind(survey.date)
            .execute(&self.pool)
            .await
            .context("failed to insert survey")?;

        Ok(())
    }
}
