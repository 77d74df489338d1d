use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use survey_api::config::{self, AppConfig};
use survey_api::factories::Controllers;
use survey_api::infra::DatabaseManager;
use survey_api::{is_production, routes};

#[derive(Debug, Parser)]
#[command(name = "survey-api", version, about = "Survey API server")]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("survey_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    // Initialize configuration (this loads the config singleton)
    let config: &AppConfig = config::config();
    tracing::info!("Starting Survey API in {:?} mode", config.environment);

    if config.uses_default_secret() {
        if is_production!() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("JWT_SECRET not set, signing tokens with the default secret");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::bootstrap(&pool)
        .await
        .context("failed to bootstrap database")?;

    let controllers = Controllers::build(config, pool.clone())?;
    let app = routes::app(
        controllers,
        Some(pool.clone()),
        config.api.max_request_size_bytes,
    );

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Survey API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    DatabaseManager::close(pool).await;
    Ok(())
}
