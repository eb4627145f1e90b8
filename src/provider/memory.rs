use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::provider::{
    CompetitionRow, EventRow, FootballDataProvider, MatchRow, ProviderError, ProviderResult,
};

/// Provider backed by rows held in memory.
///
/// Unknown (competition, season) pairs and match ids answer with
/// `ProviderError::NotFound`, the same way the open-data files 404.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    competitions: Vec<CompetitionRow>,
    matches: HashMap<(i64, i64), Vec<MatchRow>>,
    events: HashMap<i64, Vec<EventRow>>,
    unavailable: Option<String>,
    competitions_unavailable: Option<String>,
    broken_pairs: HashSet<(i64, i64)>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_competitions(mut self, rows: Vec<CompetitionRow>) -> Self {
        self.competitions.extend(rows);
        self
    }

    pub fn with_matches(
        mut self,
        competition_id: i64,
        season_id: i64,
        rows: Vec<MatchRow>,
    ) -> Self {
        self.matches
            .entry((competition_id, season_id))
            .or_default()
            .extend(rows);
        self
    }

    pub fn with_events(mut self, match_id: i64, rows: Vec<EventRow>) -> Self {
        self.events.entry(match_id).or_default().extend(rows);
        self
    }

    /// Every call fails with `ProviderError::Unavailable`.
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }

    /// Only the competition listing fails.
    pub fn competitions_unavailable(mut self, reason: impl Into<String>) -> Self {
        self.competitions_unavailable = Some(reason.into());
        self
    }

    /// Match listing for one pair fails.
    pub fn with_broken_pair(mut self, competition_id: i64, season_id: i64) -> Self {
        self.broken_pairs.insert((competition_id, season_id));
        self
    }

    fn check_available(&self) -> ProviderResult<()> {
        match &self.unavailable {
            Some(reason) => Err(ProviderError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FootballDataProvider for InMemoryProvider {
    async fn competitions(&self) -> ProviderResult<Vec<CompetitionRow>> {
        self.check_available()?;
        if let Some(reason) = &self.competitions_unavailable {
            return Err(ProviderError::Unavailable(reason.clone()));
        }
        Ok(self.competitions.clone())
    }

    async fn matches(&self, competition_id: i64, season_id: i64) -> ProviderResult<Vec<MatchRow>> {
        self.check_available()?;
        if self.broken_pairs.contains(&(competition_id, season_id)) {
            return Err(ProviderError::Unavailable(format!(
                "matches for competition {competition_id} season {season_id} unreadable"
            )));
        }
        self.matches
            .get(&(competition_id, season_id))
            .cloned()
            .ok_or_else(|| {
                ProviderError::not_found(format!(
                    "matches for competition {competition_id} season {season_id}"
                ))
            })
    }

    async fn events(&self, match_id: i64) -> ProviderResult<Vec<EventRow>> {
        self.check_available()?;
        self.events
            .get(&match_id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(format!("events for match {match_id}")))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
