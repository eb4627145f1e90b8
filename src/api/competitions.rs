use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::{lenient_bool, ApiPath, ApiQuery};
use crate::api::matches::MatchListParams;
use crate::api::AppState;
use crate::models::{Match, Season};

#[derive(Debug, Deserialize)]
pub struct CompetitionsParams {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub grouped: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeasonsParams {
    pub competition_id: i64,
}

/// Flat competition-season pairs, or competitions with nested seasons when `grouped`.
pub async fn list_competitions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CompetitionsParams>,
) -> Result<Response, ApiError> {
    if params.grouped {
        let competitions = state.service.competitions().await?;
        Ok(Json(competitions).into_response())
    } else {
        let flat = state.service.flat_competitions().await?;
        Ok(Json(flat).into_response())
    }
}

pub async fn list_seasons(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SeasonsParams>,
) -> Result<Json<Vec<Season>>, ApiError> {
    let seasons = state.service.seasons(params.competition_id).await?;
    Ok(Json(seasons))
}

pub async fn list_season_matches(
    State(state): State<AppState>,
    ApiPath((competition_id, season_id)): ApiPath<(i64, i64)>,
    ApiQuery(params): ApiQuery<MatchListParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let matches = state
        .service
        .matches(competition_id, season_id, &params.into_filter())
        .await?;
    Ok(Json(matches))
}
