//! Adapters binding the data-layer ports to concrete libraries

pub mod cryptography;
pub mod database;

pub use cryptography::{BcryptAdapter, CryptoError, JwtAdapter};
pub use database::{
    AccountPgRepository, DatabaseError, DatabaseManager, LogPgRepository, SurveyPgRepository,
    ADMIN_ROLE,
};
