//! HTTP server for the take-home pay engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use take_home_pay::api::{AppState, create_router};
use take_home_pay::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "take-home-pay", version, about = "UK contractor take-home pay calculator")]
struct Cli {
    /// Directory containing the tax configuration YAML files.
    #[arg(long, env = "TAKE_HOME_PAY_CONFIG", default_value = "./config/uk")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "TAKE_HOME_PAY_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("take_home_pay=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading tax configuration from {}", cli.config.display()))?;

    let metadata = loader.metadata();
    info!(
        code = %metadata.code,
        name = %metadata.name,
        effective_from = %metadata.effective_from,
        effective_to = %metadata.effective_to,
        "Tax configuration loaded"
    );
    let today = Local::now().date_naive();
    if !metadata.covers(today) {
        warn!(
            today = %today,
            effective_to = %metadata.effective_to,
            "Today is outside the configured tax year; figures may be out of date"
        );
    }

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;

    info!(address = %cli.bind, "Listening");
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
