// HTTP-facing error taxonomy
use serde_json::{json, Value};
use thiserror::Error;

/// Client-visible error carried in the body of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    // 400 Bad Request
    #[error("Missing param: {0}")]
    MissingParam(String),

    // 400 Bad Request (validation) or 403 Forbidden (domain rejection)
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    // 403 Forbidden
    #[error("Access denied")]
    AccessDenied,

    // 401 Unauthorized
    #[error("Unauthorized")]
    Unauthorized,

    // 500 Internal Server Error
    //
    // The stack is kept for the log sink only and never rendered to the client.
    #[error("Internal server error")]
    ServerError { stack: String },
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        HttpError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        HttpError::InvalidParam(field.into())
    }

    /// Wrap an unexpected collaborator failure, keeping its full diagnostic trace
    pub fn server_error(fault: &anyhow::Error) -> Self {
        HttpError::ServerError {
            stack: format!("{:?}", fault),
        }
    }

    /// Error kind as exposed to clients
    pub fn name(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "MissingParamError",
            HttpError::InvalidParam(_) => "InvalidParamError",
            HttpError::AccessDenied => "AccessDeniedError",
            HttpError::Unauthorized => "UnauthorizedError",
            HttpError::ServerError { .. } => "ServerError",
        }
    }

    /// Client-safe message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Status codes a response carrying this error may use
    pub fn allowed_status_codes(&self) -> &'static [u16] {
        match self {
            HttpError::MissingParam(_) => &[400],
            HttpError::InvalidParam(_) => &[400, 403],
            HttpError::AccessDenied => &[403],
            HttpError::Unauthorized => &[401],
            HttpError::ServerError { .. } => &[500],
        }
    }

    /// Diagnostic trace of a server fault
    pub fn stack(&self) -> Option<&str> {
        match self {
            HttpError::ServerError { stack } => Some(stack),
            _ => None,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "message": self.message(),
        })
    }
}
