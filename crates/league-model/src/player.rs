use serde::{Deserialize, Serialize};

/// One cumulative/average pair for a stat category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatPair {
    #[serde(rename = "누적")]
    pub cumulative: i64,
    #[serde(rename = "평균")]
    pub average: f64,
}

impl StatPair {
    pub fn new(cumulative: i64, average: f64) -> Self {
        Self {
            cumulative,
            average,
        }
    }
}

/// A player's scoring line in the output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringLine {
    #[serde(rename = "누적득점")]
    pub cumulative: i64,
    #[serde(rename = "평균득점")]
    pub average: f64,
}

/// The five secondary stat categories tracked per player.
///
/// Field order matters: it fixes the key order in the emitted JSON, which the
/// front end displays as-is (assists first, matching the published template).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalStats {
    #[serde(rename = "어시스트")]
    pub assists: StatPair,
    #[serde(rename = "리바운드")]
    pub rebounds: StatPair,
    #[serde(rename = "스틸")]
    pub steals: StatPair,
    #[serde(rename = "블록")]
    pub blocks: StatPair,
    #[serde(rename = "3점슛")]
    pub three_pointers: StatPair,
}

/// Composite lookup key joining the scoring sheet with the additional-stats
/// sheet. Uniqueness is assumed, not enforced; the importer warns on
/// duplicates (last row wins).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerKey {
    pub name: String,
    pub number: i64,
}

impl PlayerKey {
    pub fn new(name: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// A player row as read off the scoring sheet, before the additional-stats
/// merge. `team` is inherited from the nearest non-empty team cell above
/// (the template uses merged team cells).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBasic {
    pub team: String,
    pub name: String,
    pub number: i64,
    pub attendance: i64,
    pub total_score: i64,
    pub avg_score: f64,
}

impl PlayerBasic {
    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(self.name.clone(), self.number)
    }
}

/// Fully merged per-player record in the season output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "번호")]
    pub number: i64,
    #[serde(rename = "팀")]
    pub team: String,
    #[serde(rename = "선수명")]
    pub name: String,
    #[serde(rename = "득점")]
    pub scoring: ScoringLine,
    #[serde(rename = "출석")]
    pub attendance: i64,
    #[serde(rename = "부가기록")]
    pub additional: AdditionalStats,
}

impl PlayerRecord {
    /// Merge a scoring-sheet row with its additional-stats entry.
    ///
    /// A player with no additional-stats entry gets an all-zero block; the
    /// player is never dropped.
    pub fn merge(basic: PlayerBasic, additional: Option<AdditionalStats>) -> Self {
        Self {
            number: basic.number,
            team: basic.team,
            name: basic.name,
            scoring: ScoringLine {
                cumulative: basic.total_score,
                average: basic.avg_score,
            },
            attendance: basic.attendance,
            additional: additional.unwrap_or_default(),
        }
    }
}

/// The `league_stats_<season>.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    #[serde(rename = "시즌")]
    pub season: String,
    #[serde(rename = "총라운드")]
    pub total_rounds: u32,
    #[serde(rename = "총선수수")]
    pub player_count: usize,
    #[serde(rename = "선수목록")]
    pub players: Vec<PlayerRecord>,
}

impl SeasonStats {
    pub fn new(season: impl Into<String>, total_rounds: u32, players: Vec<PlayerRecord>) -> Self {
        Self {
            season: season.into(),
            total_rounds,
            player_count: players.len(),
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_basic() -> PlayerBasic {
        PlayerBasic {
            team: "화이트".to_owned(),
            name: "권인회".to_owned(),
            number: 7,
            attendance: 12,
            total_score: 96,
            avg_score: 8.0,
        }
    }

    #[test]
    fn merge_without_additional_stats_zero_fills() {
        let record = PlayerRecord::merge(sample_basic(), None);

        assert_eq!(record.additional, AdditionalStats::default());
        assert_eq!(record.additional.rebounds, StatPair::new(0, 0.0));
        assert_eq!(record.additional.three_pointers, StatPair::new(0, 0.0));
        assert_eq!(record.scoring.cumulative, 96);
        assert_eq!(record.scoring.average, 8.0);
    }

    #[test]
    fn merge_keeps_additional_stats_when_present() {
        let additional = AdditionalStats {
            assists: StatPair::new(31, 2.6),
            rebounds: StatPair::new(48, 4.0),
            ..Default::default()
        };

        let record = PlayerRecord::merge(sample_basic(), Some(additional));

        assert_eq!(record.additional.assists.cumulative, 31);
        assert_eq!(record.additional.rebounds.average, 4.0);
    }

    #[test]
    fn season_stats_counts_players() {
        let players = vec![PlayerRecord::merge(sample_basic(), None)];
        let stats = SeasonStats::new("2026년 1월", 10, players);

        assert_eq!(stats.player_count, 1);
        assert_eq!(stats.total_rounds, 10);
    }

    #[test]
    fn player_record_serializes_with_template_keys() {
        let record = PlayerRecord::merge(sample_basic(), None);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["번호"], 7);
        assert_eq!(json["팀"], "화이트");
        assert_eq!(json["선수명"], "권인회");
        assert_eq!(json["득점"]["누적득점"], 96);
        assert_eq!(json["부가기록"]["어시스트"]["누적"], 0);
    }
}
