use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::CryptoError;
use crate::data::protocols::{Decrypter, Encrypter};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: String, expiry_hours: u64) -> Result<Self, CryptoError> {
        let now = Utc::now();
        let exp =
            expires_at(now, expiry_hours).ok_or(CryptoError::InvalidExpiry(expiry_hours))?;

        Ok(Self {
            id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }
}

/// `None` when the expiry does not fit the calendar
fn expires_at(now: DateTime<Utc>, expiry_hours: u64) -> Option<DateTime<Utc>> {
    let hours = i64::try_from(expiry_hours).ok()?;
    now.checked_add_signed(Duration::try_hours(hours)?)
}

/// HS256 access tokens carrying the account id
pub struct JwtAdapter {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: u64,
}

impl JwtAdapter {
    pub fn new(secret: &str, expiry_hours: u64) -> Result<Self, CryptoError> {
        if secret.is_empty() {
            return Err(CryptoError::InvalidSecret);
        }
        if expires_at(Utc::now(), expiry_hours).is_none() {
            return Err(CryptoError::InvalidExpiry(expiry_hours));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        })
    }

    fn sign(&self, claims: &Claims) -> Result<String, CryptoError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)?)
    }
}

#[async_trait]
impl Encrypter for JwtAdapter {
    async fn encrypt(&self, plaintext: &str) -> anyhow::Result<String> {
        let claims = Claims::new(plaintext.to_string(), self.expiry_hours)?;
        Ok(self.sign(&claims)?)
    }
}

#[async_trait]
impl Decrypter for JwtAdapter {
    async fn decrypt(&self, ciphertext: &str) -> anyhow::Result<Option<String>> {
        let validation = Validation::new(Algorithm::HS256);
        match decode::<Claims>(ciphertext, &self.decoding_key, &validation) {
            Ok(data) => Ok(Some(data.claims.id)),
            Err(e) => {
                tracing::debug!("Rejected access token: {}", e);
                Ok(None)
            }
        }
    }
}
