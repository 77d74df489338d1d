use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::data::protocols::{
    AddAccountRepository, LoadAccountByEmailRepository, LoadAccountByTokenRepository,
    UpdateAccessTokenRepository,
};
use crate::domain::{AccountModel, AddAccountModel};

/// Role that passes every role check
pub const ADMIN_ROLE: &str = "admin";

/// SQLSTATE raised when an insert hits `accounts_email_key`
const UNIQUE_VIOLATION: &str = "23505";

fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(e) => e.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

#[derive(Clone)]
pub struct AccountPgRepository {
    pool: PgPool,
}

impl AccountPgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<AccountModel, sqlx::Error> {
        let id: Uuid = row.try_get("id")?;
        Ok(AccountModel {
            id: id.to_string(),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
        })
    }
}

#[async_trait]
impl AddAccountRepository for AccountPgRepository {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>> {
        let result = sqlx::query(
            "INSERT INTO accounts (id, name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password",
        )
        .bind(Uuid::new_v4())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(Some(Self::map_row(&row)?)),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!("Account insert rejected: email already registered");
                Ok(None)
            }
            Err(e) => Err(anyhow::Error::new(e).context("failed to insert account")),
        }
    }
}

#[async_trait]
impl LoadAccountByEmailRepository for AccountPgRepository {
    async fn load_by_email(&self, email: &str) -> anyhow::Result<Option<AccountModel>> {
        let row = sqlx::query(
            "SELECT id, name, email, password FROM accounts WHERE email = $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load account by email")?;

        Ok(row.as_ref().map(Self::map_row).transpose()?)
    }
}

#[async_trait]
impl UpdateAccessTokenRepository for AccountPgRepository {
    async fn update_access_token(&self, id: &str, token: &str) -> anyhow::Result<()> {
        let id = Uuid::parse_str(id).with_context(|| format!("invalid account id: {}", id))?;

        sqlx::query("UPDATE accounts SET access_token = $2 WHERE id = $1")
            .bind(id)
            .bind(token)
            .execute(&self.pool)
            .await
            .context("failed to update access token")?;

        Ok(())
    }
}

#[async_trait]
impl LoadAccountByTokenRepository for AccountPgRepository {
    /// Without a role any holder of the token matches; with one, the account
    /// must carry that role or be an admin.
    async fn load_by_token(
        &self,
        token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>> {
        let row = sqlx::query(
            "SELECT id, name, email, password FROM accounts
             WHERE access_token = $1
               AND ($2::text IS NULL OR role = $2 OR role = $3)
             LIMIT 1",
        )
        .bind(token)
        .bind(role)
        .bind(ADMIN_ROLE)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load account by token")?;

        Ok(row.as_ref().map(Self::map_row).transpose()?)
    }
}
