// POST /api/signup - create an account and sign it in

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::{respond, string_fields, Controller};
use crate::domain::{AddAccount, AddAccountModel, Authentication, AuthenticationModel};
use crate::error::HttpError;
use crate::http::{bad_request, forbidden, ok, HttpRequest, HttpResponse};
use crate::validation::Validation;

/// Registers an account, then authenticates it so the client receives an
/// access token in the same round trip.
///
/// Responses:
/// - 200 `{ "accessToken": "..." }`
/// - 400 missing/invalid field
/// - 403 `InvalidParam("email")` when the email is already registered
/// - 500 on any collaborator fault
pub struct SignUpController {
    add_account: Arc<dyn AddAccount>,
    validation: Arc<dyn Validation>,
    authentication: Arc<dyn Authentication>,
}

impl SignUpController {
    pub fn new(
        add_account: Arc<dyn AddAccount>,
        validation: Arc<dyn Validation>,
        authentication: Arc<dyn Authentication>,
    ) -> Self {
        Self {
            add_account,
            validation,
            authentication,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> anyhow::Result<HttpResponse> {
        if let Some(error) = self.validation.validate(&request.body)? {
            return Ok(bad_request(error));
        }

        let [name, email, password] =
            match string_fields(&request.body, ["name", "email", "password"]) {
                Ok(fields) => fields,
                Err(error) => return Ok(bad_request(error)),
            };

        let account = self
            .add_account
            .add(AddAccountModel {
                name,
                email: email.clone(),
                password: password.clone(),
            })
            .await?;

        if account.is_none() {
            tracing::warn!("Signup rejected: email already registered");
            return Ok(forbidden(HttpError::invalid_param("email")));
        }

        let access_token = self
            .authentication
            .auth(AuthenticationModel { email, password })
            .await?
            .ok_or_else(|| anyhow::anyhow!("new account could not be authenticated"))?;

        Ok(ok(json!({ "accessToken": access_token })))
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond("signup", self.try_handle(&request).await)
    }
}
