use serde::{Deserialize, Serialize};

/// The season manifest shared across all converter runs
/// (`metadata_manifest.json`). Downstream consumers read it to discover which
/// seasons have published output.
///
/// Set-like membership with sequence-like storage: insertion order is
/// preserved and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub seasons: Vec<String>,
}

impl Manifest {
    pub fn contains(&self, season_code: &str) -> bool {
        self.seasons.iter().any(|s| s == season_code)
    }

    /// Append `season_code` unless already present. Returns `true` when the
    /// manifest changed. Idempotent.
    pub fn insert(&mut self, season_code: &str) -> bool {
        if self.contains(season_code) {
            return false;
        }
        self.seasons.push(season_code.to_owned());
        true
    }
}
