use std::sync::Arc;

use crate::validation::{
    CompareFieldsValidation, EmailValidation, EmailValidator, EmailValidatorAdapter,
    RequiredFieldValidation, Validation, ValidationComposite,
};

fn required(fields: &[&str]) -> Vec<Box<dyn Validation>> {
    fields
        .iter()
        .map(|name| Box::new(RequiredFieldValidation::new(*name)) as Box<dyn Validation>)
        .collect()
}

fn email_validator() -> Arc<dyn EmailValidator> {
    Arc::new(EmailValidatorAdapter)
}

pub fn make_signup_validation() -> ValidationComposite {
    let mut validations = required(&["name", "email", "password", "passwordConfirmation"]);
    validations.push(Box::new(CompareFieldsValidation::new(
        "password",
        "passwordConfirmation",
    )));
    validations.push(Box::new(EmailValidation::new("email", email_validator())));
    ValidationComposite::new(validations)
}

pub fn make_login_validation() -> ValidationComposite {
    let mut validations = required(&["email", "password"]);
    validations.push(Box::new(EmailValidation::new("email", email_validator())));
    ValidationComposite::new(validations)
}

pub fn make_add_survey_validation() -> ValidationComposite {
    ValidationComposite::new(required(&["question", "answers"]))
}
