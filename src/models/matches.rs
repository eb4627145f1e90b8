use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: i64,
    pub match_date: NaiveDate,
    pub match_round: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub competition_id: i64,
    pub season_id: i64,
}

/// Match summary plus venue, officiating and event volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub summary: Match,
    pub stadium: String,
    pub referee: String,
    pub events_count: usize,
}
