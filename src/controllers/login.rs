// POST /api/login - exchange credentials for an access token

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::{respond, string_fields, Controller};
use crate::domain::{Authentication, AuthenticationModel};
use crate::http::{bad_request, ok, unauthorized, HttpRequest, HttpResponse};
use crate::validation::Validation;

pub struct LoginController {
    authentication: Arc<dyn Authentication>,
    validation: Arc<dyn Validation>,
}

impl LoginController {
    pub fn new(authentication: Arc<dyn Authentication>, validation: Arc<dyn Validation>) -> Self {
        Self {
            authentication,
            validation,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> anyhow::Result<HttpResponse> {
        if let Some(error) = self.validation.validate(&request.body)? {
            return Ok(bad_request(error));
        }

        let [email, password] = match string_fields(&request.body, ["email", "password"]) {
            Ok(fields) => fields,
            Err(error) => return Ok(bad_request(error)),
        };

        match self
            .authentication
            .auth(AuthenticationModel { email, password })
            .await?
        {
            Some(access_token) => Ok(ok(json!({ "accessToken": access_token }))),
            None => {
                tracing::warn!("Login rejected: invalid credentials");
                Ok(unauthorized())
            }
        }
    }
}

#[async_trait]
impl Controller for LoginController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond("login", self.try_handle(&request).await)
    }
}
