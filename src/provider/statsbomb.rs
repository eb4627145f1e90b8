//! StatsBomb open-data client.
//!
//! Reads the static JSON layout (`competitions.json`,
//! `matches/{competition}/{season}.json`, `events/{match}.json`) with rate
//! limiting and bounded retries on transient failures.

use std::future::Future;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::{AppConfig, RateLimitConfig, Secrets};
use crate::provider::{
    CompetitionRow, EventRow, FootballDataProvider, MatchRow, ProviderError, ProviderResult,
};

type Limiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

pub struct StatsBombClient {
    http: reqwest::Client,
    base_url: String,
    /// Only set when the private API is enabled.
    api_key: Option<SecretString>,
    limiter: Arc<Limiter>,
    max_retries: u32,
    backoff_base_ms: u64,
    backoff_max_ms: u64,
}

impl StatsBombClient {
    pub fn new(config: &AppConfig, secrets: &Secrets) -> ProviderResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.provider.request_timeout())
            .build()?;

        let api_key = secrets
            .statsbomb_api_key
            .as_ref()
            .filter(|_| config.provider.use_private_api)
            .map(|key| SecretString::from(key.expose_secret().to_owned()));

        Ok(Self {
            http,
            base_url: config.provider_base_url(secrets),
            api_key,
            limiter: create_rate_limiter(&config.rate_limit),
            max_retries: config.provider.max_retries,
            backoff_base_ms: config.rate_limit.backoff_base_ms,
            backoff_max_ms: config.rate_limit.backoff_max_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> ProviderResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let url = url.as_str();

        self.with_retry(move || async move {
            self.rate_limit().await;
            self.fetch_once(url, resource).await
        })
        .await
    }

    async fn fetch_once<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
    ) -> ProviderResult<T> {
        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::not_found(resource));
        }
        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "Provider response received");

        serde_json::from_slice(&body).map_err(|source| ProviderError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn rate_limit(&self) {
        self.limiter.until_ready().await;
    }

    /// Retry transient failures with capped exponential backoff.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> ProviderResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ProviderResult<T>>,
    {
        let mut attempt = 0u32;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;

                    if !e.is_transient() || attempt > self.max_retries {
                        return Err(e);
                    }

                    let backoff_ms = std::cmp::min(
                        self.backoff_base_ms
                            .saturating_mul(2u64.saturating_pow(attempt - 1)),
                        self.backoff_max_ms,
                    );

                    warn!(
                        attempt,
                        backoff_ms,
                        error = %e,
                        "Provider request failed, retrying"
                    );

                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                }
            }
        }
    }
}

#[async_trait]
impl FootballDataProvider for StatsBombClient {
    #[instrument(skip(self))]
    async fn competitions(&self) -> ProviderResult<Vec<CompetitionRow>> {
        self.get_json("competitions.json", "competitions").await
    }

    #[instrument(skip(self))]
    async fn matches(&self, competition_id: i64, season_id: i64) -> ProviderResult<Vec<MatchRow>> {
        let path = format!("matches/{competition_id}/{season_id}.json");
        let resource = format!("matches for competition {competition_id} season {season_id}");
        self.get_json(&path, &resource).await
    }

    #[instrument(skip(self))]
    async fn events(&self, match_id: i64) -> ProviderResult<Vec<EventRow>> {
        let path = format!("events/{match_id}.json");
        let resource = format!("events for match {match_id}");
        self.get_json(&path, &resource).await
    }

    fn name(&self) -> &str {
        "statsbomb"
    }
}

fn create_rate_limiter(config: &RateLimitConfig) -> Arc<Limiter> {
    let rps = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
    let burst = NonZeroU32::new(config.burst_size).unwrap_or(rps);

    let quota = Quota::per_second(rps).allow_burst(burst);
    Arc::new(RateLimiter::direct(quota))
}
