#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

use survey_api::data::protocols::LogErrorRepository;
use survey_api::domain::{
    AccountModel, AddAccount, AddAccountModel, AddSurvey, AddSurveyModel, Authentication,
    AuthenticationModel, LoadAccountByToken,
};
use survey_api::factories::{Controllers, UseCases};
use survey_api::routes;

pub const ADMIN_TOKEN: &str = "admin_token";
pub const USER_TOKEN: &str = "user_token";

/// In-memory account store standing in for the database-backed use cases
#[derive(Default)]
pub struct FakeAccounts {
    accounts: Mutex<HashMap<String, AccountModel>>,
}

#[async_trait]
impl AddAccount for FakeAccounts {
    async fn add(&self, account: AddAccountModel) -> anyhow::Result<Option<AccountModel>> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&account.email) {
            return Ok(None);
        }
        let created = AccountModel {
            id: format!("id_{}", accounts.len() + 1),
            name: account.name,
            email: account.email.clone(),
            password: account.password,
        };
        accounts.insert(account.email, created.clone());
        Ok(Some(created))
    }
}

#[async_trait]
impl Authentication for FakeAccounts {
    async fn auth(&self, credentials: AuthenticationModel) -> anyhow::Result<Option<String>> {
        if credentials.email == "broken@mail.com" {
            anyhow::bail!("account store unavailable");
        }
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .get(&credentials.email)
            .filter(|account| account.password == credentials.password)
            .map(|account| format!("token_{}", account.id)))
    }
}

#[async_trait]
impl LoadAccountByToken for FakeAccounts {
    async fn load(
        &self,
        access_token: &str,
        role: Option<&str>,
    ) -> anyhow::Result<Option<AccountModel>> {
        let account = |id: &str| AccountModel {
            id: id.to_string(),
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        };
        Ok(match (access_token, role) {
            (ADMIN_TOKEN, _) => Some(account("admin_id")),
            (USER_TOKEN, None) => Some(account("user_id")),
            _ => None,
        })
    }
}

/// Survey sink that can be switched to fail
#[derive(Default)]
pub struct FakeSurveys {
    pub surveys: Mutex<Vec<AddSurveyModel>>,
    pub failing: bool,
}

#[async_trait]
impl AddSurvey for FakeSurveys {
    async fn add(&self, survey: AddSurveyModel) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("survey store unavailable");
        }
        self.surveys.lock().unwrap().push(survey);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordedErrors {
    pub stacks: Mutex<Vec<String>>,
}

#[async_trait]
impl LogErrorRepository for RecordedErrors {
    async fn log_error(&self, stack: &str) -> anyhow::Result<()> {
        self.stacks.lock().unwrap().push(stack.to_string());
        Ok(())
    }
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
    pub surveys: Arc<FakeSurveys>,
    pub errors: Arc<RecordedErrors>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(FakeSurveys::default()).await
}

/// Serve the real router over fake use cases on an unused port
pub async fn spawn_server_with(surveys: FakeSurveys) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let accounts = Arc::new(FakeAccounts::default());
    let surveys = Arc::new(surveys);
    let errors = Arc::new(RecordedErrors::default());
    let use_cases = UseCases {
        add_account: accounts.clone(),
        authentication: accounts.clone(),
        add_survey: surveys.clone(),
        load_account_by_token: accounts,
    };
    let app = routes::app(Controllers::new(use_cases, errors.clone()), None, 64 * 1024);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let server = TestServer {
        port,
        base_url,
        client: reqwest::Client::new(),
        surveys,
        errors,
    };
    server.wait_ready(Duration::from_secs(5)).await?;
    Ok(server)
}
