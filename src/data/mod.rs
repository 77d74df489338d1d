//! Use-case implementations built on infrastructure ports

pub mod protocols;
pub mod usecases;

pub use usecases::{DbAddAccount, DbAddSurvey, DbAuthentication, DbLoadAccountByToken};
