//! Request body validation
//!
//! A [`Validation`] inspects the whole request body and reports the first
//! problem it finds. Single rules are combined into a [`ValidationComposite`],
//! which runs them in insertion order and stops at the first failure, so
//! presence checks must be added before the rules that compare or format-check
//! the same fields.

use std::sync::Arc;

use serde_json::Value;

use crate::error::HttpError;

pub mod compare_fields;
pub mod composite;
pub mod email;
pub mod email_validator;
pub mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use email_validator::{EmailValidator, EmailValidatorAdapter};
pub use required_field::RequiredFieldValidation;

/// `Ok(None)` when the body passes, `Ok(Some(_))` with the client error when it
/// does not, `Err(_)` when a collaborator failed while checking.
pub type ValidationResult = anyhow::Result<Option<HttpError>>;

/// A single check over a request body
pub trait Validation: Send + Sync {
    fn validate(&self, input: &Value) -> ValidationResult;
}

impl<T: Validation + ?Sized> Validation for Arc<T> {
    fn validate(&self, input: &Value) -> ValidationResult {
        (**self).validate(input)
    }
}

/// Field value, treating `null` as absent
pub(crate) fn field<'a>(input: &'a Value, name: &str) -> Option<&'a Value> {
    input.get(name).filter(|value| !value.is_null())
}
