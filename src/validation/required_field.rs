use serde_json::Value;

use super::{field, Validation, ValidationResult};
use crate::error::HttpError;

/// Fails with `MissingParam` when the field is absent, null or an empty string
#[derive(Debug, Clone)]
pub struct RequiredFieldValidation {
    field_name: String,
}

impl RequiredFieldValidation {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Value) -> ValidationResult {
        let present = match field(input, &self.field_name) {
            None => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };

        if present {
            Ok(None)
        } else {
            Ok(Some(HttpError::missing_param(&self.field_name)))
        }
    }
}
