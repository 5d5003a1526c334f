//! `league-model` defines the in-memory data model for the GBL league
//! spreadsheet converter.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the `.xlsx` import layer (`league-xlsx`)
//! - the converter CLI (`league-convert`)
//!
//! Everything here is JSON-safe via `serde`. The player-facing documents keep
//! the source template's Korean field names (`시즌`, `선수목록`, ...) because
//! the downstream front end consumes them verbatim; the season-metadata
//! document uses camelCase keys.

mod awards;
mod manifest;
mod metadata;
mod player;
mod season;
mod standings;

pub use awards::{extract_double_double, extract_mom, extract_top_scorer, RoundAwards, TopScorer};
pub use manifest::Manifest;
pub use metadata::{RoundRecord, SeasonMetadata, StandingEntry};
pub use player::{
    AdditionalStats, PlayerBasic, PlayerKey, PlayerRecord, ScoringLine, SeasonStats, StatPair,
};
pub use season::{SeasonCode, SeasonCodeError};
pub use standings::{parse_record_text, TeamStanding, EMPTY_RECORD_TEXT};

/// Round a per-game average to one decimal place.
///
/// Ties round to even (`0.25` → `0.2`), matching the numerically-stable
/// convention rather than schoolbook half-up; see DESIGN.md.
pub fn round1dp(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
