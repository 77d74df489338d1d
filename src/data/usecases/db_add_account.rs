use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::{AddAccountRepository, Hasher, LoadAccountByEmailRepository};
use crate::domain::{AccountModel, AddAccount, AddAccountModel};

/// Registers an account unless its email is taken; stores the hashed password
pub struct DbAddAccount {
    hasher: Arc<dyn Hasher>,
    add_account_repository: Arc<dyn AddAccountRepository>,
    load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
}

impl DbAddAccount {
    pub fn new(
        hasher: Arc<dyn Hasher>,
        add_account_repository: Arc<dyn AddAccountRepository>,
        load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
    ) -> Self {
        Self {
            hasher,
            add_account_repository,
            load_account_by_email_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>> {
        if self
            .load_account_by_email_repository
            .load_by_email(&account.email)
            .await?
            .is_some()
        {
            tracing::debug!("Email already registered, skipping account creation");
            return Ok(None);
        }

        let hashed_password = self.hasher.hash(&account.password).await?;
        let account = self
            .add_account_repository
            .add(AddAccountModel {
                password: hashed_password,
                ..account
            })
            .await?;

        match &account {
            Some(account) => tracing::debug!("Created account {}", account.id),
            // Lost a race with a concurrent signup for the same email
            None => tracing::debug!("Email registered concurrently, account not created"),
        }
        Ok(account)
    }
}
