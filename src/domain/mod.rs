//! Domain records and the use-case contracts controllers depend on

pub mod models;
pub mod usecases;

pub use models::{
    AccountModel, AddAccountModel, AddSurveyModel, AuthenticationModel, SurveyAnswerModel,
};
pub use usecases::{AddAccount, AddSurvey, Authentication, LoadAccountByToken};
