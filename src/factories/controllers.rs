use std::sync::Arc;

use sqlx::PgPool;

use super::validation::{make_add_survey_validation, make_login_validation, make_signup_validation};
use crate::config::AppConfig;
use crate::controllers::{AddSurveyController, Controller, LoginController, SignUpController};
use crate::data::protocols::LogErrorRepository;
use crate::data::{DbAddAccount, DbAddSurvey, DbAuthentication, DbLoadAccountByToken};
use crate::decorators::LogControllerDecorator;
use crate::domain::{AddAccount, AddSurvey, Authentication, LoadAccountByToken};
use crate::infra::{
    AccountPgRepository, BcryptAdapter, CryptoError, JwtAdapter, LogPgRepository,
    SurveyPgRepository, ADMIN_ROLE,
};
use crate::middleware::AuthMiddleware;

/// Use cases the controllers are built on
#[derive(Clone)]
pub struct UseCases {
    pub add_account: Arc<dyn AddAccount>,
    pub authentication: Arc<dyn Authentication>,
    pub add_survey: Arc<dyn AddSurvey>,
    pub load_account_by_token: Arc<dyn LoadAccountByToken>,
}

impl UseCases {
    /// Database-backed use cases
    pub fn build(config: &AppConfig, pool: PgPool) -> Result<Self, CryptoError> {
        let accounts = Arc::new(AccountPgRepository::new(pool.clone()));
        let surveys = Arc::new(SurveyPgRepository::new(pool));
        let bcrypt = Arc::new(BcryptAdapter::new(config.security.bcrypt_cost));
        let jwt = Arc::new(JwtAdapter::new(
            &config.security.jwt_secret,
            config.security.jwt_expiry_hours,
        )?);

        Ok(Self {
            add_account: Arc::new(DbAddAccount::new(
                bcrypt.clone(),
                accounts.clone(),
                accounts.clone(),
            )),
            authentication: Arc::new(DbAuthentication::new(
                accounts.clone(),
                bcrypt,
                jwt.clone(),
                accounts.clone(),
            )),
            add_survey: Arc::new(DbAddSurvey::new(surveys)),
            load_account_by_token: Arc::new(DbLoadAccountByToken::new(jwt, accounts)),
        })
    }
}

/// Every endpoint controller plus the middlewares guarding them
#[derive(Clone)]
pub struct Controllers {
    pub signup: Arc<dyn Controller>,
    pub login: Arc<dyn Controller>,
    pub add_survey: Arc<dyn Controller>,
    pub admin_auth: Arc<dyn Controller>,
}

impl Controllers {
    pub fn build(config: &AppConfig, pool: PgPool) -> Result<Self, CryptoError> {
        let use_cases = UseCases::build(config, pool.clone())?;
        Ok(Self::new(use_cases, Arc::new(LogPgRepository::new(pool))))
    }

    /// Wire controllers over the given use cases; server faults go to `log_error_repository`
    pub fn new(use_cases: UseCases, log_error_repository: Arc<dyn LogErrorRepository>) -> Self {
        let decorate = |controller: Arc<dyn Controller>| -> Arc<dyn Controller> {
            Arc::new(LogControllerDecorator::new(
                controller,
                log_error_repository.clone(),
            ))
        };

        let signup = SignUpController::new(
            use_cases.add_account,
            Arc::new(make_signup_validation()),
            use_cases.authentication.clone(),
        );
        let login = LoginController::new(
            use_cases.authentication,
            Arc::new(make_login_validation()),
        );
        let add_survey =
            AddSurveyController::new(Arc::new(make_add_survey_validation()), use_cases.add_survey);

        Self {
            signup: decorate(Arc::new(signup)),
            login: decorate(Arc::new(login)),
            add_survey: decorate(Arc::new(add_survey)),
            admin_auth: decorate(Arc::new(AuthMiddleware::new(
                use_cases.load_account_by_token,
                Some(ADMIN_ROLE.to_string()),
            ))),
        }
    }
}
