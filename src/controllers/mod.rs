//! Endpoint controllers
//!
//! Every controller follows the same shape: validate the body, call one
//! use case (optionally a second), map the outcome to a response. `handle`
//! never fails; faults raised along the way become a 500.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HttpError;
use crate::http::{server_error, HttpRequest, HttpResponse};

pub mod add_survey;
pub mod login;
pub mod signup;

pub use add_survey::AddSurveyController;
pub use login::LoginController;
pub use signup::SignUpController;

#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

#[async_trait]
impl<T: Controller + ?Sized> Controller for Arc<T> {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        (**self).handle(request).await
    }
}

/// Turn the fallible body of a `handle` into a response
pub(crate) fn respond(endpoint: &str, result: anyhow::Result<HttpResponse>) -> HttpResponse {
    match result {
        Ok(response) => response,
        Err(fault) => {
            tracing::error!("{} failed: {:#}", endpoint, fault);
            server_error(&fault)
        }
    }
}

/// Read string fields from a validated body
///
/// Presence is already guaranteed by validation; a non-string value is
/// reported as an invalid param.
pub(crate) fn string_fields<const N: usize>(
    body: &Value,
    names: [&str; N],
) -> Result<[String; N], HttpError> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, name) in values.iter_mut().zip(names) {
        *slot = body
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| HttpError::invalid_param(name))?;
    }
    Ok(values)
}
