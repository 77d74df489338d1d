use std::collections::HashMap;

use serde_json::Value;

/// Transport-independent request handed to controllers
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub body: Value,
    headers: HashMap<String, String>,
    /// Account resolved by the auth middleware, when the route is protected
    pub account_id: Option<String>,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            ..Default::default()
        }
    }

    /// Add a header; names are stored lower-cased
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
