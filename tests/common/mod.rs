#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use estilo_futbol::api::{build_router, AppState};
use estilo_futbol::config::AppConfig;
use estilo_futbol::provider::{
    CompetitionRow, EventRow, FootballDataProvider, InMemoryProvider, MatchRow, NamedRef, TeamRef,
};
use estilo_futbol::service::FootballService;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub fn competition_row(
    id: i64,
    name: &str,
    country: &str,
    season_id: i64,
    season: &str,
) -> CompetitionRow {
    CompetitionRow {
        competition_id: id,
        competition_name: name.to_string(),
        country_name: Some(country.to_string()),
        season_id: Some(season_id),
        season_name: Some(season.to_string()),
    }
}

pub fn match_row(
    id: i64,
    date: (i32, u32, u32),
    round: &str,
    home: &str,
    away: &str,
    score: (u32, u32),
) -> MatchRow {
    MatchRow {
        match_id: id,
        match_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        home_team: TeamRef { name: home.to_string() },
        away_team: TeamRef { name: away.to_string() },
        home_score: Some(score.0),
        away_score: Some(score.1),
        competition_stage: Some(NamedRef {
            id: None,
            name: round.to_string(),
        }),
        stadium: Some(serde_json::json!({"id": 1, "name": "Estadio Central"})),
        referee: Some(serde_json::json!({"id": 2, "name": "J. Smith"})),
    }
}

pub fn events(count: usize) -> Vec<EventRow> {
    (0..count)
        .map(|i| EventRow {
            id: Some(format!("evt-{i}")),
            index: Some(i as u64 + 1),
        })
        .collect()
}

/// La Liga (seasons 1, 2), Premier League (1, 3), Women's World Cup (106).
/// Match 1 and 2 live in La Liga 2020/2021, match 50 in Premier League 2019/2020.
/// Same dataset as the crate's unit-test fixture, with dated matches and
/// venue/referee objects filled in.
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
                match_row(1, (2023, 1, 1), "Round 1", "Team A", "Team B", (2, 1)),
                match_row(2, (2023, 1, 8), "Round 2", "Team C", "Team D", (0, 0)),
            ],
        )
        .with_matches(11, 2, vec![])
        .with_matches(2, 1, vec![])
        .with_matches(
            2,
            3,
            vec![match_row(50, (2019, 9, 14), "Regular Season", "Arsenal", "Chelsea", (1, 3))],
        )
        .with_matches(37, 106, vec![])
        .with_events(1, events(4))
        .with_events(50, events(2))
}

pub fn test_config() -> AppConfig {
    AppConfig::from_toml(include_str!("../../config/default.toml")).expect("default config parses")
}

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve the router on an ephemeral port.
pub async fn spawn_server(provider: impl FootballDataProvider + 'static) -> TestServer {
    let config = test_config();
    let service = FootballService::new(Arc::new(provider), Duration::from_secs(5));
    let app = build_router(AppState::new(service), &config.server);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}

impl TestServer {
    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        reqwest::get(format!("{}{}", self.base_url, path_and_query))
            .await
            .expect("request should reach test server")
    }
}
