use crate::models::Match;

/// Client-requested narrowing of a match list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    /// Exact round label. Empty means no filter.
    pub round: Option<String>,
    /// Keep at most this many. Zero or negative means no limit.
    pub limit: Option<i64>,
}

impl MatchFilter {
    /// Round filter first, then truncation.
    pub fn apply(&self, mut matches: Vec<Match>) -> Vec<Match> {
        if let Some(round) = self.round.as_deref().filter(|r| !r.is_empty()) {
            matches.retain(|m| m.match_round == round);
        }

        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            matches.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        matches
    }
}
