//! Turns denormalized provider rows into API records.

use std::collections::HashMap;

use crate::models::{Competition, FlatCompetitionSeason, Match, MatchDetail, Season};
use crate::provider::{CompetitionRow, MatchRow};

/// One competition per distinct id, in first-seen order, each carrying its
/// seasons in input order. Name and country come from the first row seen.
pub fn group_competitions(rows: &[CompetitionRow]) -> Vec<Competition> {
    let mut competitions: Vec<Competition> = Vec::new();
    let mut position: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let idx = *position.entry(row.competition_id).or_insert_with(|| {
            competitions.push(Competition {
                competition_id: row.competition_id,
                competition_name: row.competition_name.clone(),
                country_name: row.country_name.clone().unwrap_or_default(),
                seasons: Vec::new(),
            });
            competitions.len() - 1
        });

        if let Some(season) = season_of(row) {
            competitions[idx].seasons.push(season);
        }
    }

    competitions
}

/// One record per row that carries a season, input order preserved.
pub fn flatten_competitions(rows: &[CompetitionRow]) -> Vec<FlatCompetitionSeason> {
    rows.iter()
        .filter_map(|row| {
            let season = season_of(row)?;
            Some(FlatCompetitionSeason {
                competition_id: row.competition_id,
                season_id: season.season_id,
                competition_name: row.competition_name.clone(),
                season_name: season.season_name,
                country_name: row.country_name.clone().unwrap_or_default(),
            })
        })
        .collect()
}

/// Seasons of the first competition whose id matches exactly.
pub fn find_seasons(competitions: &[Competition], competition_id: i64) -> Option<&[Season]> {
    competitions
        .iter()
        .find(|c| c.competition_id == competition_id)
        .map(|c| c.seasons.as_slice())
}

pub fn to_match(row: &MatchRow, competition_id: i64, season_id: i64) -> Match {
    Match {
        match_id: row.match_id,
        match_date: row.match_date,
        match_round: row.round().to_string(),
        home_team: row.home_team.name.clone(),
        away_team: row.away_team.name.clone(),
        home_score: row.home_score.unwrap_or_default(),
        away_score: row.away_score.unwrap_or_default(),
        competition_id,
        season_id,
    }
}

pub fn to_match_detail(
    row: &MatchRow,
    competition_id: i64,
    season_id: i64,
    events_count: usize,
) -> MatchDetail {
    MatchDetail {
        summary: to_match(row, competition_id, season_id),
        stadium: nested_name(row.stadium.as_ref()),
        referee: nested_name(row.referee.as_ref()),
        events_count,
    }
}

fn season_of(row: &CompetitionRow) -> Option<Season> {
    Some(Season {
        season_id: row.season_id?,
        season_name: row.season_name.clone().unwrap_or_default(),
    })
}

/// `name` of a nested `{ "name": ... }` object; empty for anything else.
fn nested_name(value: Option<&serde_json::Value>) -> String {
    value
        .and_then(|v| v.get("name"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}
