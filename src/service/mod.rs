//! Request-scoped operations over a football data provider.
//!
//! Nothing is cached: every call rebuilds its records from fresh provider rows.

pub mod detail;
pub mod filter;
pub mod reshape;

#[cfg(test)]
pub(crate) mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{instrument, warn};

use crate::models::{Competition, FlatCompetitionSeason, Match, MatchDetail, Season};
use crate::provider::{FootballDataProvider, ProviderError};

pub use filter::MatchFilter;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Competition with ID {0} not found")]
    CompetitionNotFound(i64),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub struct FootballService {
    provider: Arc<dyn FootballDataProvider>,
    detail_timeout: Duration,
}

impl FootballService {
    pub fn new(provider: Arc<dyn FootballDataProvider>, detail_timeout: Duration) -> Self {
        Self {
            provider,
            detail_timeout,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Competitions with their seasons nested.
    #[instrument(skip(self))]
    pub async fn competitions(&self) -> ServiceResult<Vec<Competition>> {
        let rows = self.provider.competitions().await?;
        Ok(reshape::group_competitions(&rows))
    }

    /// One record per (competition, season) pair.
    #[instrument(skip(self))]
    pub async fn flat_competitions(&self) -> ServiceResult<Vec<FlatCompetitionSeason>> {
        let rows = self.provider.competitions().await?;
        Ok(reshape::flatten_competitions(&rows))
    }

    #[instrument(skip(self))]
    pub async fn seasons(&self, competition_id: i64) -> ServiceResult<Vec<Season>> {
        let competitions = self.competitions().await?;
        reshape::find_seasons(&competitions, competition_id)
            .map(<[Season]>::to_vec)
            .ok_or(ServiceError::CompetitionNotFound(competition_id))
    }

    /// Matches of one competition season, narrowed by `filter`. A pair the
    /// provider has no file for is an empty list.
    #[instrument(skip(self))]
    pub async fn matches(
        &self,
        competition_id: i64,
        season_id: i64,
        filter: &MatchFilter,
    ) -> ServiceResult<Vec<Match>> {
        let rows = match self.provider.matches(competition_id, season_id).await {
            Ok(rows) => rows,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let matches = rows
            .iter()
            .map(|row| reshape::to_match(row, competition_id, season_id))
            .collect();

        Ok(filter.apply(matches))
    }

    /// `None` covers both an unknown match and a failed or timed-out lookup.
    #[instrument(skip(self))]
    pub async fn match_detail(&self, match_id: i64) -> Option<MatchDetail> {
        let lookup = detail::resolve_match_detail(self.provider.as_ref(), match_id);

        match tokio::time::timeout(self.detail_timeout, lookup).await {
            Ok(detail) => detail,
            Err(_) => {
                warn!(
                    match_id,
                    timeout_s = self.detail_timeout.as_secs(),
                    "Match detail lookup timed out, reporting as not found"
                );
                None
            }
        }
    }
}
