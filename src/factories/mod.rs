//! Composition root
//!
//! Builds the validation, use-case and controller graphs once at startup.
//! Nothing here is rebuilt per request.

pub mod controllers;
pub mod validation;

pub use controllers::{Controllers, UseCases};
pub use validation::{make_add_survey_validation, make_login_validation, make_signup_validation};
