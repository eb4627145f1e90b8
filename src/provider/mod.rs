//! Football data providers.
//!
//! A provider hands back the raw, denormalized rows the upstream source
//! publishes. Reshaping those rows into API records happens in `service`.

pub mod memory;
pub mod rows;
pub mod statsbomb;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub use memory::InMemoryProvider;
pub use rows::{CompetitionRow, EventRow, MatchRow, NamedRef, TeamRef};
pub use statsbomb::StatsBombClient;

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Worth retrying: connection trouble, throttling, or a server-side failure.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            Self::NotFound { .. } | Self::Decode { .. } | Self::Unavailable(_) => false,
        }
    }
}

/// Source of raw competition, match and event rows.
#[async_trait]
pub trait FootballDataProvider: Send + Sync {
    /// Every competition-season pair the provider knows about.
    async fn competitions(&self) -> ProviderResult<Vec<CompetitionRow>>;

    /// Matches played in one season of one competition.
    async fn matches(&self, competition_id: i64, season_id: i64) -> ProviderResult<Vec<MatchRow>>;

    /// Recorded events for one match.
    async fn events(&self, match_id: i64) -> ProviderResult<Vec<EventRow>>;

    /// Human-readable name of this provider.
    fn name(&self) -> &str;
}
