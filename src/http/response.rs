use serde_json::Value;

use crate::error::HttpError;

/// Body of a response envelope
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Data(Value),
    Error(HttpError),
    Empty,
}

/// Status code plus body, returned by every `handle`
///
/// Responses are only built through the helpers below, which keep the status
/// code and the error kind of the body consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status_code: u16,
    body: ResponseBody,
}

impl HttpResponse {
    /// A status the error kind does not allow becomes a 500 carrying the mismatch
    fn error(status_code: u16, error: HttpError) -> Self {
        if !error.allowed_status_codes().contains(&status_code) {
            let fault = anyhow::anyhow!(
                "{} cannot be sent with status {}",
                error.name(),
                status_code
            );
            tracing::error!("{}", fault);
            return Self {
                status_code: 500,
                body: ResponseBody::Error(HttpError::server_error(&fault)),
            };
        }
        Self {
            status_code,
            body: ResponseBody::Error(error),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Error carried by the body, if any
    pub fn error_body(&self) -> Option<&HttpError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Payload carried by the body, if any
    pub fn data(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Data(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// JSON rendering of the body; `None` for empty responses
    pub fn body_json(&self) -> Option<Value> {
        match &self.body {
            ResponseBody::Data(data) => Some(data.clone()),
            ResponseBody::Error(error) => Some(error.to_json()),
            ResponseBody::Empty => None,
        }
    }
}

/// 400 with a validation error
pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse::error(400, error)
}

/// 401 for credentials that matched no account
pub fn unauthorized() -> HttpResponse {
    HttpResponse::error(401, HttpError::Unauthorized)
}

/// 403 for domain rejections and denied access
pub fn forbidden(error: HttpError) -> HttpResponse {
    HttpResponse::error(403, error)
}

/// 500 wrapping an unexpected fault
pub fn server_error(fault: &anyhow::Error) -> HttpResponse {
    HttpResponse::error(500, HttpError::server_error(fault))
}

/// 200 with a payload
pub fn ok(data: Value) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        body: ResponseBody::Data(data),
    }
}

/// 204 with no body
pub fn no_content() -> HttpResponse {
    HttpResponse {
        status_code: 204,
        body: ResponseBody::Empty,
    }
}
