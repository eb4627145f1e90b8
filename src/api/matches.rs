use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::{saturating_limit, ApiPath, ApiQuery};
use crate::api::AppState;
use crate::models::{Match, MatchDetail};
use crate::service::MatchFilter;

#[derive(Debug, Deserialize)]
pub struct MatchListParams {
    pub round: Option<String>,
    #[serde(default, deserialize_with = "saturating_limit")]
    pub limit: Option<i64>,
}

impl MatchListParams {
    pub fn into_filter(self) -> MatchFilter {
        MatchFilter {
            round: self.round,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchesParams {
    pub competition_id: i64,
    pub season_id: i64,
    pub round: Option<String>,
    #[serde(default, deserialize_with = "saturating_limit")]
    pub limit: Option<i64>,
}

pub async fn list_matches(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MatchesParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let matches = state
        .service
        .matches(
            params.competition_id,
            params.season_id,
            &MatchFilter {
                round: params.round,
                limit: params.limit,
            },
        )
        .await?;
    Ok(Json(matches))
}

pub async fn get_match(
    State(state): State<AppState>,
    ApiPath(match_id): ApiPath<i64>,
) -> Result<Json<MatchDetail>, ApiError> {
    state
        .service
        .match_detail(match_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Match not found".to_string()))
}
