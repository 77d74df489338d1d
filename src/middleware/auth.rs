use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::controllers::{respond, Controller};
use crate::domain::LoadAccountByToken;
use crate::error::HttpError;
use crate::http::{forbidden, ok, HttpRequest, HttpResponse};

/// Header carrying the access token issued at login/signup
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Gate for protected routes
///
/// Answers 200 `{ "accountId": ... }` when the token resolves to an account
/// holding the required role, 403 `AccessDenied` otherwise. The HTTP adapter
/// only forwards the request downstream on 200.
pub struct AuthMiddleware {
    load_account_by_token: Arc<dyn LoadAccountByToken>,
    role: Option<String>,
}

impl AuthMiddleware {
    pub fn new(load_account_by_token: Arc<dyn LoadAccountByToken>, role: Option<String>) -> Self {
        Self {
            load_account_by_token,
            role,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> anyhow::Result<HttpResponse> {
        let Some(access_token) = request
            .header(ACCESS_TOKEN_HEADER)
            .filter(|token| !token.is_empty())
        else {
            return Ok(forbidden(HttpError::AccessDenied));
        };

        let account = self
            .load_account_by_token
            .load(access_token, self.role.as_deref())
            .await?;

        match account {
            Some(account) => Ok(ok(json!({ "accountId": account.id }))),
            None => {
                tracing::warn!("Access denied: token did not resolve to an account");
                Ok(forbidden(HttpError::AccessDenied))
            }
        }
    }
}

#[async_trait]
impl Controller for AuthMiddleware {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond("auth middleware", self.try_handle(&request).await)
    }
}
