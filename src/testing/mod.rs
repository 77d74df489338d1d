//! Hand-written stubs for unit tests
//!
//! Each stub answers with a canned [`Reply`] and records the arguments it
//! was called with so tests can assert on them.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::controllers::Controller;
use crate::data::protocols::{
    AddAccountRepository, AddSurveyRepository, Decrypter, Encrypter, HashComparer, Hasher,
    LoadAccountByEmailRepository, LoadAccountByTokenRepository, LogErrorRepository,
    UpdateAccessTokenRepository,
};
use crate::domain::{
    AccountModel, AddAccount, AddAccountModel, AddSurvey, AddSurveyModel, Authentication,
    AuthenticationModel, LoadAccountByToken,
};
use crate::error::HttpError;
use crate::http::{HttpRequest, HttpResponse};
use crate::validation::{EmailValidator, Validation, ValidationResult};

/// Canned answer of a stub
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Value(T),
    Fault(&'static str),
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> anyhow::Result<T> {
        match self {
            Reply::Value(value) => Ok(value.clone()),
            Reply::Fault(message) => Err(anyhow::anyhow!(*message)),
        }
    }
}

/// Argument recorder
#[derive(Debug)]
pub struct Calls<A>(Mutex<Vec<A>>);

impl<A> Default for Calls<A> {
    fn default() -> Self {
        Self(Mutex::new(Vec::new()))
    }
}

impl<A: Clone> Calls<A> {
    fn record(&self, args: A) {
        self.0.lock().unwrap().push(args);
    }

    pub fn all(&self) -> Vec<A> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

pub fn fake_account() -> AccountModel {
    AccountModel {
        id: "any_id".to_string(),
        name: "any_name".to_string(),
        email: "any_email@mail.com".to_string(),
        password: "hashed_password".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub struct EmailValidatorStub {
    reply: Reply<bool>,
    calls: Calls<String>,
}

impl EmailValidatorStub {
    pub fn valid() -> Self {
        Self {
            reply: Reply::Value(true),
            calls: Calls::default(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            reply: Reply::Value(false),
            calls: Calls::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Reply::Fault("email validator failed"),
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.all()
    }
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, email: &str) -> anyhow::Result<bool> {
        self.calls.record(email.to_string());
        self.reply.get()
    }
}

pub struct ValidationStub {
    reply: Reply<Option<HttpError>>,
    calls: Calls<Value>,
}

impl ValidationStub {
    pub fn passing() -> Self {
        Self {
            reply: Reply::Value(None),
            calls: Calls::default(),
        }
    }

    pub fn failing_with(error: HttpError) -> Self {
        Self {
            reply: Reply::Value(Some(error)),
            calls: Calls::default(),
        }
    }

    pub fn faulting() -> Self {
        Self {
            reply: Reply::Fault("validation failed"),
            calls: Calls::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.count()
    }

    pub fn inputs(&self) -> Vec<Value> {
        self.calls.all()
    }
}

impl Validation for ValidationStub {
    fn validate(&self, input: &Value) -> ValidationResult {
        self.calls.record(input.clone());
        self.reply.get()
    }
}

// ---------------------------------------------------------------------------
// Use cases
// ---------------------------------------------------------------------------

pub struct AddAccountStub {
    reply: Reply<Option<AccountModel>>,
    pub calls: Calls<AddAccountModel>,
}

impl AddAccountStub {
    pub fn new(reply: Reply<Option<AccountModel>>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountStub {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>> {
        self.calls.record(account);
        self.reply.get()
    }
}

pub struct AuthenticationStub {
    reply: Reply<Option<String>>,
    pub calls: Calls<AuthenticationModel>,
}

impl AuthenticationStub {
    pub fn new(reply: Reply<Option<String>>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl Authentication for AuthenticationStub {
    async fn auth(&self, credentials: AuthenticationModel) -> anyhow::Result<Option<String>> {
        self.calls.record(credentials);
        self.reply.get()
    }
}

pub struct AddSurveyStub {
    reply: Reply<()>,
    pub calls: Calls<AddSurveyModel>,
}

impl AddSurveyStub {
    pub fn new(reply: Reply<()>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl AddSurvey for AddSurveyStub {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()> {
        self.calls.record(survey);
        self.reply.get()
    }
}

pub struct LoadAccountByTokenStub {
    reply: Reply<Option<AccountModel>>,
    pub calls: Calls<(String, Option<String>)>,
}

impl LoadAccountByTokenStub {
    pub fn new(reply: Reply<Option<AccountModel>>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl LoadAccountByToken for LoadAccountByTokenStub {
    async fn load(
        &self,
        access_token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>> {
        self.calls
            .record((access_token.to_string(), role.map(str::to_string)));
        self.reply.get()
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

pub struct ControllerStub {
    response: HttpResponse,
    pub calls: Calls<HttpRequest>,
}

impl ControllerStub {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl Controller for ControllerStub {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.calls.record(request);
        self.response.clone()
    }
}

pub struct LogErrorRepositoryStub {
    reply: Reply<()>,
    pub calls: Calls<String>,
}

impl LogErrorRepositoryStub {
    pub fn new(reply: Reply<()>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl LogErrorRepository for LogErrorRepositoryStub {
    async fn log_error(&self, stack: &str) -> anyhow::Result<()> {
        self.calls.record(stack.to_string());
        self.reply.get()
    }
}

// ---------------------------------------------------------------------------
// Cryptography
// ---------------------------------------------------------------------------

pub struct HasherStub {
    reply: Reply<String>,
    pub calls: Calls<String>,
}

impl HasherStub {
    pub fn new(reply: Reply<String>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl Hasher for HasherStub {
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
        self.calls.record(plaintext.to_string());
        self.reply.get()
    }
}

pub struct HashComparerStub {
    reply: Reply<bool>,
    pub calls: Calls<(String, String)>,
}

impl HashComparerStub {
    pub fn new(reply: Reply<bool>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl HashComparer for HashComparerStub {
    async fn compare(&self, plaintext: &str, digest: &str) -> anyhow::Result<bool> {
        self.calls.record((plaintext.to_string(), digest.to_string()));
        self.reply.get()
    }
}

pub struct EncrypterStub {
    reply: Reply<String>,
    pub calls: Calls<String>,
}

impl EncrypterStub {
    pub fn new(reply: Reply<String>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl Encrypter for EncrypterStub {
    async fn encrypt(&self, plaintext: &str) -> anyhow::Result<String> {
        self.calls.record(plaintext.to_string());
        self.reply.get()
    }
}

pub struct DecrypterStub {
    reply: Reply<Option<String>>,
    pub calls: Calls<String>,
}

impl DecrypterStub {
    pub fn new(reply: Reply<Option<String>>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl Decrypter for DecrypterStub {
    async fn decrypt(&self, ciphertext: &str) -> anyhow::Result<Option<String>> {
        self.calls.record(ciphertext.to_string());
        self.reply.get()
    }
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

/// Account repository answering every account port
pub struct AccountRepositoryStub {
    pub add_reply: Reply<Option<AccountModel>>,
    pub by_email_reply: Reply<Option<AccountModel>>,
    pub by_token_reply: Reply<Option<AccountModel>>,
    pub update_reply: Reply<()>,
    pub add_calls: Calls<AddAccountModel>,
    pub by_email_calls: Calls<String>,
    pub by_token_calls: Calls<(String, Option<String>)>,
    pub update_calls: Calls<(String, String)>,
}

impl Default for AccountRepositoryStub {
    fn default() -> Self {
        Self {
            add_reply: Reply::Value(Some(fake_account())),
            by_email_reply: Reply::Value(None),
            by_token_reply: Reply::Value(Some(fake_account())),
            update_reply: Reply::Value(()),
            add_calls: Calls::default(),
            by_email_calls: Calls::default(),
            by_token_calls: Calls::default(),
            update_calls: Calls::default(),
        }
    }
}

#[async_trait]
impl AddAccountRepository for AccountRepositoryStub {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>> {
        self.add_calls.record(account);
        self.add_reply.get()
    }
}

#[async_trait]
impl LoadAccountByEmailRepository for AccountRepositoryStub {
    async fn load_by_email(&self, email: &str) -> anyhow::Result<Option<AccountModel>> {
        self.by_email_calls.record(email.to_string());
        self.by_email_reply.get()
    }
}

#[async_trait]
impl UpdateAccessTokenRepository for AccountRepositoryStub {
    async fn update_access_token(&self, id: &str, token: &str) -> anyhow::Result<()> {
        self.update_calls.record((id.to_string(), token.to_string()));
        self.update_reply.get()
    }
}

#[async_trait]
impl LoadAccountByTokenRepository for AccountRepositoryStub {
    async fn load_by_token(
        &self,
        token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>> {
        self.by_token_calls
            .record((token.to_string(), role.map(str::to_string)));
        self.by_token_reply.get()
    }
}

pub struct SurveyRepositoryStub {
    reply: Reply<()>,
    pub calls: Calls<AddSurveyModel>,
}

impl SurveyRepositoryStub {
    pub fn new(reply: Reply<()>) -> Self {
        Self {
            reply,
            calls: Calls::default(),
        }
    }
}

#[async_trait]
impl AddSurveyRepository for SurveyRepositoryStub {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()> {
        self.calls.record(survey);
        self.reply.get()
    }
}
