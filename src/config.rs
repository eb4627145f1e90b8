use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub rate_limit: RateLimitConfig,
    pub service: ServiceConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Prefix the resource routes are mounted under. Empty or "/" mounts at the root.
    pub api_prefix: String,
    /// Allowed CORS origins. A single "*" allows any origin.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub max_retries: u32,
    pub use_private_api: bool,
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
    pub backoff_base_ms: u64,
    pub backoff_max_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Upper bound for resolving a single match detail (event fetch plus scan).
    pub detail_timeout_seconds: u64,
}

impl ServiceConfig {
    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub json_logs: bool,
}

/// Secrets loaded exclusively from environment variables.
/// Not serializable, not stored in config files.
pub struct Secrets {
    pub statsbomb_api_key: Option<SecretString>,
    pub statsbomb_api_url: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            statsbomb_api_key: std::env::var("STATSBOMB_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .map(SecretString::from),
            statsbomb_api_url: std::env::var("STATSBOMB_API_URL")
                .ok()
                .filter(|u| !u.is_empty()),
        }
    }

    pub fn none() -> Self {
        Self {
            statsbomb_api_key: None,
            statsbomb_api_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, overlaying environment variables for secrets.
    pub fn load(config_path: &Path) -> Result<(Self, Secrets)> {
        dotenvy::dotenv().ok();

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let secrets = Secrets::from_env();

        Ok((config, secrets))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Base URL the provider client should talk to. A private API URL from the
    /// environment only takes effect when the private API is switched on.
    pub fn provider_base_url(&self, secrets: &Secrets) -> String {
        let url = match (&secrets.statsbomb_api_url, self.provider.use_private_api) {
            (Some(url), true) => url.as_str(),
            _ => self.provider.base_url.as_str(),
        };
        url.trim_end_matches('/').to_string()
    }
}
