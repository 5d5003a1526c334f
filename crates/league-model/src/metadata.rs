use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::awards::RoundAwards;
use crate::standings::TeamStanding;

/// One round-summary block from the league-points sheet, in scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub teams: Vec<TeamStanding>,
    #[serde(default)]
    pub awards: RoundAwards,
}

/// A team's line in the season-level standings table: the round record
/// projected without its verbatim record text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub code: String,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub points: f64,
}

impl From<&TeamStanding> for StandingEntry {
    fn from(standing: &TeamStanding) -> Self {
        Self {
            code: standing.code.clone(),
            name: standing.name.clone(),
            wins: standing.wins,
            losses: standing.losses,
            points: standing.points,
        }
    }
}

/// The `league_metadata_<season>.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonMetadata {
    pub season: String,
    pub current_round: u32,
    pub total_rounds: u32,
    pub standings: Vec<StandingEntry>,
    pub round_history: Vec<RoundRecord>,
}

impl SeasonMetadata {
    /// Assemble the metadata document from scanned round records.
    ///
    /// Standings come from the record whose round number equals
    /// `current_round`. When no record matches, the **last record in scan
    /// order** is used, not the one with the highest round number. That
    /// fallback is long-standing observable behavior; changing it would
    /// silently alter published standings.
    ///
    /// Returns `None` when no rounds were scanned (the metadata document is
    /// omitted entirely in that case).
    pub fn assemble(
        season: impl Into<String>,
        current_round: u32,
        total_rounds: u32,
        rounds: Vec<RoundRecord>,
    ) -> Option<Self> {
        let last = rounds.last()?;
        let current = rounds
            .iter()
            .find(|r| r.round == current_round)
            .unwrap_or(last);

        let mut standings: Vec<StandingEntry> =
            current.teams.iter().map(StandingEntry::from).collect();
        // Stable sort: teams on equal points keep their scan order.
        standings.sort_by(|a, b| {
            b.points
                .partial_cmp(&a.points)
                .unwrap_or(Ordering::Equal)
        });

        Some(Self {
            season: season.into(),
            current_round,
            total_rounds,
            standings,
            round_history: rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn standing(code: &str, name: &str, points: f64) -> TeamStanding {
        TeamStanding::from_record_text(code, name, Some("1승 1패".to_owned()), points)
    }

    fn round(number: u32, points: [f64; 3]) -> RoundRecord {
        RoundRecord {
            round: number,
            teams: vec![
                standing("white", "화이트", points[0]),
                standing("black", "블랙", points[1]),
                standing("red", "레드", points[2]),
            ],
            awards: RoundAwards::default(),
        }
    }

    #[test]
    fn standings_sorted_by_points_descending() {
        let metadata =
            SeasonMetadata::assemble("2026년 1월", 1, 10, vec![round(1, [10.0, 15.0, 12.0])])
                .unwrap();

        let points: Vec<f64> = metadata.standings.iter().map(|s| s.points).collect();
        assert_eq!(points, vec![15.0, 12.0, 10.0]);
        assert_eq!(metadata.standings[0].name, "블랙");
    }

    #[test]
    fn equal_points_keep_scan_order() {
        let metadata =
            SeasonMetadata::assemble("2026년 1월", 1, 10, vec![round(1, [7.0, 7.0, 3.0])])
                .unwrap();

        // 화이트 appears before 블랙 in the round block, so it stays first.
        assert_eq!(metadata.standings[0].name, "화이트");
        assert_eq!(metadata.standings[1].name, "블랙");
    }

    #[test]
    fn unmatched_current_round_falls_back_to_last_scanned_record() {
        // Scan order is deliberately not ascending: round 4 is scanned last
        // even though round 6 has the highest number.
        let rounds = vec![
            round(2, [1.0, 2.0, 3.0]),
            round(6, [9.0, 8.0, 7.0]),
            round(4, [5.0, 5.0, 5.0]),
        ];

        let metadata = SeasonMetadata::assemble("2026년 1월", 5, 10, rounds).unwrap();

        // Round 5 does not exist; the last-scanned record (round 4) wins,
        // not the maximum-numbered one (round 6).
        assert_eq!(metadata.standings[0].points, 5.0);
        assert_eq!(metadata.current_round, 5);
        assert_eq!(metadata.round_history.len(), 3);
        assert_eq!(metadata.round_history[1].round, 6);
    }

    #[test]
    fn matching_current_round_is_used_when_present() {
        let rounds = vec![round(1, [1.0, 1.0, 1.0]), round(2, [4.0, 2.0, 0.0])];

        let metadata = SeasonMetadata::assemble("2026년 1월", 2, 10, rounds).unwrap();

        assert_eq!(metadata.standings[0].points, 4.0);
    }

    #[test]
    fn no_rounds_means_no_metadata_document() {
        assert_eq!(SeasonMetadata::assemble("2026년 1월", 1, 10, vec![]), None);
    }

    #[test]
    fn metadata_serializes_with_camel_case_keys() {
        let metadata =
            SeasonMetadata::assemble("2026년 1월", 1, 10, vec![round(1, [10.0, 15.0, 12.0])])
                .unwrap();
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["currentRound"], 1);
        assert_eq!(json["totalRounds"], 10);
        assert_eq!(json["roundHistory"][0]["round"], 1);
        assert_eq!(json["roundHistory"][0]["teams"][0]["recordText"], "1승 1패");
        // Projected standings drop the verbatim record text.
        assert!(json["standings"][0].get("recordText").is_none());
    }
}
