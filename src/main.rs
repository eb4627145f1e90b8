use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use estilo_futbol::api::{self, AppState};
use estilo_futbol::config::{AppConfig, DEFAULT_CONFIG_PATH};
use estilo_futbol::monitoring::logger;
use estilo_futbol::provider::StatsBombClient;
use estilo_futbol::service::FootballService;

#[derive(Debug, Parser)]
#[command(name = "estilo-futbol", about = "Football analytics API over StatsBomb data")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the bind address from the config file
    #[arg(long)]
    bind: Option<String>,

    /// Override the port from the config file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (mut config, secrets) = AppConfig::load(&args.config)?;

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logger::init_logging(&config.monitoring)?;

    let client = StatsBombClient::new(&config, &secrets)
        .context("Failed to create StatsBomb client")?;

    let provider_url = client.base_url().to_string();

    let service = FootballService::new(Arc::new(client), config.service.detail_timeout());

    tracing::info!(
        provider = service.provider_name(),
        provider_url = %provider_url,
        private_api = config.provider.use_private_api,
        detail_timeout_s = config.service.detail_timeout_seconds,
        "Estilo Futbol API starting"
    );
    api::serve(&config.server, AppState::new(service)).await
}
