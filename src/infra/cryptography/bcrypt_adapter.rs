use async_trait::async_trait;

use super::CryptoError;
use crate::data::protocols::{HashComparer, Hasher};

/// Salted password hashing; work runs off the async executor
#[derive(Debug, Clone, Copy)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    async fn hash_blocking(&self, plaintext: &str) -> Result<String, CryptoError> {
        let plaintext = plaintext.to_string();
        let cost = self.cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(digest)
    }

    async fn verify_blocking(&self, plaintext: &str, digest: &str) -> Result<bool, CryptoError> {
        let plaintext = plaintext.to_string();
        let digest = digest.to_string();
        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await??;
        Ok(matches)
    }
}

#[async_trait]
impl Hasher for BcryptAdapter {
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
        Ok(self.hash_blocking(plaintext).await?)
    }
}

#[async_trait]
impl HashComparer for BcryptAdapter {
    async fn compare(&self, plaintext: &str, digest: &str) -> anyhow::Result<bool> {
        Ok(self.verify_blocking(plaintext, digest).await?)
    }
}
