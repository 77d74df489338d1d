use serde_json::Value;

use super::{field, Validation, ValidationResult};
use crate::error::HttpError;

/// Fails with `InvalidParam(field_to_compare)` when both fields are present
/// and hold different values. Presence is left to `RequiredFieldValidation`.
#[derive(Debug, Clone)]
pub struct CompareFieldsValidation {
    field_name: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field_name: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Value) -> ValidationResult {
        match (
            field(input, &self.field_name),
            field(input, &self.field_to_compare),
        ) {
            (Some(value), Some(other)) if value != other => {
                Ok(Some(HttpError::invalid_param(&self.field_to_compare)))
            }
            _ => Ok(None),
        }
    }
}
