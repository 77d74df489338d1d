//! Use-case contracts
//!
//! Each returns `anyhow::Result`: `Err` is an unexpected fault, which the
//! calling controller converts into a 500. Expected negative outcomes (email
//! taken, bad credentials, unknown token) are `Ok(None)`.

use async_trait::async_trait;

use super::models::{AccountModel, AddAccountModel, AddSurveyModel, AuthenticationModel};

#[async_trait]
pub trait AddAccount: Send + Sync {
    /// `None` when the email is already registered
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>>;
}

#[async_trait]
pub trait Authentication: Send + Sync {
    /// Access token, or `None` when the credentials match no account
    async fn auth(&self, credentials: AuthenticationModel) -> anyhow::Result<Option<String>>;
}

#[async_trait]
pub trait AddSurvey: Send + Sync {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()>;
}

#[async_trait]
pub trait LoadAccountByToken: Send + Sync {
    /// Account owning the token, or `None` when the token is invalid,
    /// expired or the account lacks the role
    async fn load(
        &self,
        access_token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>>;
}
