use chrono::NaiveDate;

use crate::models::Match;
use crate::provider::{CompetitionRow, EventRow, InMemoryProvider, MatchRow, NamedRef, TeamRef};
use crate::service::reshape::to_match;

pub fn competition_row(
    competition_id: i64,
    competition_name: &str,
    country_name: &str,
    season_id: i64,
    season_name: &str,
) -> CompetitionRow {
    CompetitionRow {
        competition_id,
        competition_name: competition_name.to_string(),
        country_name: Some(country_name.to_string()),
        season_id: Some(season_id),
        season_name: Some(season_name.to_string()),
    }
}

pub fn match_row(
    match_id: i64,
    round: &str,
    home: &str,
    away: &str,
    home_score: u32,
    away_score: u32,
) -> MatchRow {
    MatchRow {
        match_id,
        match_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        home_team: TeamRef {
            name: home.to_string(),
        },
        away_team: TeamRef {
            name: away.to_string(),
        },
        home_score: Some(home_score),
        away_score: Some(away_score),
        competition_stage: (!round.is_empty()).then(|| NamedRef {
            id: None,
            name: round.to_string(),
        }),
        stadium: None,
        referee: None,
    }
}

pub fn events(count: usize) -> Vec<EventRow> {
    (0..count)
        .map(|i| EventRow {
            id: Some(format!("event-{i}")),
            index: Some(i as u64 + 1),
        })
        .collect()
}

pub fn two_round_matches() -> Vec<Match> {
    vec![
        to_match(&match_row(1, "Round 1", "Team A", "Team B", 2, 1), 11, 1),
        to_match(&match_row(2, "Round 2", "Team C", "Team D", 0, 0), 11, 1),
    ]
}

/// La Liga (seasons 1, 2), Premier League (1, 3), Women's World Cup (106).
/// Match 1 and 2 live in La Liga 2020/2021, match 50 in Premier League 2019/2020.
pub fn sample_provider() -> InMemoryProvider {
    InMemoryProvider::new()
        .with_competitions(vec![
            competition_row(11, "La Liga", "Spain", 1, "2020/2021"),
            competition_row(11, "La Liga", "Spain", 2, "2021/2022"),
            competition_row(2, "Premier League", "England", 1, "2020/2021"),
            competition_row(2, "Premier League", "England", 3, "2019/2020"),
            competition_row(37, "FIFA Women's World Cup", "International", 106, "2019"),
        ])
        .with_matches(
            11,
            1,
            vec![
                match_row(1, "Round 1", "Team A", "Team B", 2, 1),
                match_row(2, "Round 2", "Team C", "Team D", 0, 0),
            ],
        )
        .with_matches(11, 2, vec![])
        .with_matches(2, 1, vec![])
        .with_matches(
            2,
            3,
            vec![match_row(50, "Regular Season", "Arsenal", "Chelsea", 1, 3)],
        )
        .with_matches(37, 106, vec![])
        .with_events(1, events(4))
        .with_events(50, events(2))
}
