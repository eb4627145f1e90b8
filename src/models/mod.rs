pub mod competition;
pub mod matches;

pub use competition::{Competition, FlatCompetitionSeason, Season};
pub use matches::{Match, MatchDetail};
