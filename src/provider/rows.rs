//! Raw rows as published by the provider. Field names follow the StatsBomb
//! open-data layout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One competition-season pair. Seasons are denormalized into the
/// competition listing, so a competition spans as many rows as it has seasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRow {
    pub competition_id: i64,
    pub competition_name: String,
    pub country_name: Option<String>,
    pub season_id: Option<i64>,
    pub season_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(alias = "home_team_name", alias = "away_team_name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub match_id: i64,
    pub match_date: NaiveDate,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub competition_stage: Option<NamedRef>,
    /// Kept loosely typed: older files carry bare strings or nulls here.
    pub stadium: Option<serde_json::Value>,
    pub referee: Option<serde_json::Value>,
}

impl MatchRow {
    pub fn round(&self) -> &str {
        self.competition_stage
            .as_ref()
            .map(|stage| stage.name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: Option<String>,
    pub index: Option<u64>,
}
