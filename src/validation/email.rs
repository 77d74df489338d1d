use std::sync::Arc;

use serde_json::Value;

use super::{field, EmailValidator, Validation, ValidationResult};
use crate::error::HttpError;

/// Fails with `InvalidParam` when the field is not a well-formed email
///
/// Absent fields pass; pair with a `RequiredFieldValidation` for presence.
#[derive(Clone)]
pub struct EmailValidation {
    field_name: String,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field_name: impl Into<String>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field_name: field_name.into(),
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &Value) -> ValidationResult {
        let Some(value) = field(input, &self.field_name) else {
            return Ok(None);
        };

        let is_valid = match value.as_str() {
            Some(email) => self.email_validator.is_valid(email)?,
            None => false,
        };

        if is_valid {
            Ok(None)
        } else {
            Ok(Some(HttpError::invalid_param(&self.field_name)))
        }
    }
}
