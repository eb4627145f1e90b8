//! Match detail lookup.
//!
//! The provider cannot look a match up by id, so a match is confirmed through
//! its event file and then located by scanning every competition season.
//! That is O(competitions x seasons) provider calls in the worst case.

use tracing::{debug, info, warn};

use crate::models::MatchDetail;
use crate::provider::{FootballDataProvider, MatchRow, ProviderResult};
use crate::service::reshape::{group_competitions, to_match_detail};

/// Resolve a match detail, treating every failure as an absent match.
pub async fn resolve_match_detail(
    provider: &dyn FootballDataProvider,
    match_id: i64,
) -> Option<MatchDetail> {
    let events = match provider.events(match_id).await {
        Ok(events) if !events.is_empty() => events,
        Ok(_) => {
            debug!(match_id, "No events recorded for match");
            return None;
        }
        Err(e) if e.is_not_found() => {
            debug!(match_id, "No event file for match");
            return None;
        }
        Err(e) => {
            warn!(match_id, error = %e, "Event lookup failed, reporting as not found");
            return None;
        }
    };

    match locate_match(provider, match_id).await {
        Ok(Some(found)) => Some(to_match_detail(
            &found.row,
            found.competition_id,
            found.season_id,
            events.len(),
        )),
        Ok(None) => {
            info!(match_id, "Match has events but no listing in any competition season");
            None
        }
        Err(e) => {
            warn!(match_id, error = %e, "Match detail lookup failed, reporting as not found");
            None
        }
    }
}

struct LocatedMatch {
    row: MatchRow,
    competition_id: i64,
    season_id: i64,
}

/// First (competition, season) pair whose listing contains the match.
async fn locate_match(
    provider: &dyn FootballDataProvider,
    match_id: i64,
) -> ProviderResult<Option<LocatedMatch>> {
    let competitions = group_competitions(&provider.competitions().await?);

    for competition in &competitions {
        for season in &competition.seasons {
            let listing = provider
                .matches(competition.competition_id, season.season_id)
                .await;
            let rows = match listing {
                Ok(rows) => rows,
                Err(e) if e.is_not_found() => {
                    debug!(
                        competition_id = competition.competition_id,
                        season_id = season.season_id,
                        "Skipping season without a match listing during match scan"
                    );
                    continue;
                }
                Err(e) => {
                    warn!(
                        competition_id = competition.competition_id,
                        season_id = season.season_id,
                        error = %e,
                        "Skipping unreadable season during match scan"
                    );
                    continue;
                }
            };

            if let Some(row) = rows.into_iter().find(|r| r.match_id == match_id) {
                return Ok(Some(LocatedMatch {
                    row,
                    competition_id: competition.competition_id,
                    season_id: season.season_id,
                }));
            }
        }
    }

    Ok(None)
}
