//! Ports the data-layer use cases need from infrastructure

use async_trait::async_trait;

use crate::domain::{AccountModel, AddAccountModel, AddSurveyModel};

#[async_trait]
pub trait Hasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String>;
}

#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, plaintext: &str, digest: &str) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, plaintext: &str) -> anyhow::Result<String>;
}

#[async_trait]
pub trait Decrypter: Send + Sync {
    /// `None` when the ciphertext is not a token this system issued
    async fn decrypt(&self, ciphertext: &str) -> anyhow::Result<Option<String>>;
}

#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// `None` when the store already holds an account with this email
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>>;
}

#[async_trait]
pub trait LoadAccountByEmailRepository: Send + Sync {
    async fn load_by_email(&self, email: &str) -> anyhow::Result<Option<AccountModel>>;
}

#[async_trait]
pub trait UpdateAccessTokenRepository: Send + Sync {
    async fn update_access_token(&self, id: &str, token: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait LoadAccountByTokenRepository: Send + Sync {
    async fn load_by_token(
        &self,
        token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>>;
}

#[async_trait]
pub trait AddSurveyRepository: Send + Sync {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()>;
}

/// Sink for server-fault traces
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> anyhow::Result<()>;
}
