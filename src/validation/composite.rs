use serde_json::Value;

use super::{Validation, ValidationResult};

/// Ordered set of validations evaluated with short-circuit semantics
///
/// The first validation that reports an error (or fails) ends the run.
#[derive(Default)]
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }

    pub fn len(&self) -> usize {
        self.validations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &Value) -> ValidationResult {
        for validation in &self.validations {
            if let Some(error) = validation.validate(input)? {
                return Ok(Some(error));
            }
        }
        Ok(None)
    }
}
