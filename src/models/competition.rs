use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub season_id: i64,
    pub season_name: String,
}

/// A competition with every season the provider lists for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub competition_id: i64,
    pub competition_name: String,
    pub country_name: String,
    pub seasons: Vec<Season>,
}

/// One (competition, season) pair, denormalized for dropdown-style clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatCompetitionSeason {
    pub competition_id: i64,
    pub season_id: i64,
    pub competition_name: String,
    pub season_name: String,
    pub country_name: String,
}
