use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::{Decrypter, LoadAccountByTokenRepository};
use crate::domain::{AccountModel, LoadAccountByToken};

/// Resolves an access token to its account, optionally requiring a role
pub struct DbLoadAccountByToken {
    decrypter: Arc<dyn Decrypter>,
    load_account_by_token_repository: Arc<dyn LoadAccountByTokenRepository>,
}

impl DbLoadAccountByToken {
    pub fn new(
        decrypter: Arc<dyn Decrypter>,
        load_account_by_token_repository: Arc<dyn LoadAccountByTokenRepository>,
    ) -> Self {
        Self {
            decrypter,
            load_account_by_token_repository,
        }
    }
}

#[async_trait]
impl LoadAccountByToken for DbLoadAccountByToken {
    async fn load(
        &self,
        access_token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>> {
        // Signature or expiry failure
        if self.decrypter.decrypt(access_token).await?.is_none() {
            return Ok(None);
        }

        self.load_account_by_token_repository
            .load_by_token(access_token, role)
            .await
    }
}
