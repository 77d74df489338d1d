use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::{
    Encrypter, HashComparer, LoadAccountByEmailRepository, UpdateAccessTokenRepository,
};
use crate::domain::{Authentication, AuthenticationModel};

/// Verifies credentials and issues an access token bound to the account id.
///
/// The issued token is persisted on the account so `DbLoadAccountByToken`
/// can resolve it later; a token issued earlier is replaced.
pub struct DbAuthentication {
    load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    encrypter: Arc<dyn Encrypter>,
    update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
}

impl DbAuthentication {
    pub fn new(
        load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
        hash_comparer: Arc<dyn HashComparer>,
        encrypter: Arc<dyn Encrypter>,
        update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
    ) -> Self {
        Self {
            load_account_by_email_repository,
            hash_comparer,
            encrypter,
            update_access_token_repository,
        }
    }
}

#[async_trait]
impl Authentication for DbAuthentication {
    async fn auth(&self, credentials: AuthenticationModel) -> anyhow::Result<Option<String>> {
        let account = match self
            .load_account_by_email_repository
            .load_by_email(&credentials.email)
            .await?
        {
            Some(account) => account,
            None => return Ok(None),
        };

        if !self
            .hash_comparer
            .compare(&credentials.password, &account.password)
            .await?
        {
            return Ok(None);
        }

        let access_token = self.encrypter.encrypt(&account.id).await?;
        self.update_access_token_repository
            .update_access_token(&account.id, &access_token)
            .await?;

        tracing::debug!("Issued access token for account {}", account.id);
        Ok(Some(access_token))
    }
}
