pub mod bcrypt_adapter;
pub mod jwt_adapter;

pub use bcrypt_adapter::BcryptAdapter;
pub use jwt_adapter::JwtAdapter;

use thiserror::Error;

/// Errors from the cryptography adapters
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Token expiry of {0} hours is out of range")]
    InvalidExpiry(u64),

    #[error("Password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("JWT generation error: {0}")]
    TokenGeneration(#[from] jsonwebtoken::errors::Error),

    #[error("Hashing task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}
