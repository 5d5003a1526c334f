//! Extraction from the league-points sheet (`GBL 승점`): repeating
//! round-summary blocks containing team standings and award announcements.

use std::sync::OnceLock;

use league_model::{RoundAwards, RoundRecord, TeamStanding};
use regex::Regex;

use crate::layout::{self, standings as cols};
use crate::sheet::Sheet;
use crate::{ImportError, ImportWarning};

/// Matches a round-summary marker such as `3라운드 누적 리그 결과`.
fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)라운드\s*누적\s*리그\s*결과").expect("valid regex"))
}

/// Scan column A for round-summary markers and extract one [`RoundRecord`]
/// per marker, in scan order.
///
/// The records are *not* re-sorted: downstream fallback logic depends on the
/// scan order, even if the sheet lists rounds out of sequence.
pub fn extract_rounds(
    sheet: &Sheet,
    warnings: &mut Vec<ImportWarning>,
) -> Result<Vec<RoundRecord>, ImportError> {
    let mut rounds = Vec::new();

    for row in 0..sheet.row_count() {
        let Some(text) = sheet.text(row, cols::MARKER_COL) else {
            continue;
        };
        let Some(captures) = marker_regex().captures(&text) else {
            continue;
        };
        let Ok(round) = captures[1].parse::<u32>() else {
            continue;
        };

        let teams = read_team_rows(sheet, row, warnings)?;
        let awards = scan_awards(sheet, row);
        rounds.push(RoundRecord {
            round,
            teams,
            awards,
        });
    }

    Ok(rounds)
}

/// Read the three standings rows below a marker. Rows whose team-name cell
/// is not one of the known team names are ignored (the block layout leaves
/// room for notes).
fn read_team_rows(
    sheet: &Sheet,
    marker_row: u32,
    warnings: &mut Vec<ImportWarning>,
) -> Result<Vec<TeamStanding>, ImportError> {
    let mut teams = Vec::new();

    for offset in cols::TEAM_ROW_OFFSETS {
        let row = marker_row + offset;
        if row >= sheet.row_count() {
            break;
        }

        let Some(name) = sheet.text(row, cols::TEAM_NAME_COL) else {
            continue;
        };
        let Some(code) = layout::team_code(&name) else {
            warnings.push(ImportWarning::new(format!(
                "sheet `{}` row {}: ignoring standings row for unknown team `{}`",
                sheet.name(),
                row + 1,
                name
            )));
            continue;
        };

        let record_text = sheet.text(row, cols::RECORD_COL);
        let points = sheet.number(row, cols::POINTS_COL)?;
        teams.push(TeamStanding::from_record_text(code, name, record_text, points));
    }

    Ok(teams)
}

/// Search the rows below a marker for award announcements. The window is
/// bounded so one round's awards never bleed into the next block; the first
/// match of each award type wins.
fn scan_awards(sheet: &Sheet, marker_row: u32) -> RoundAwards {
    let mut awards = RoundAwards::default();
    let last_row = (marker_row + cols::AWARD_WINDOW_ROWS).min(sheet.row_count().saturating_sub(1));

    for row in (marker_row + 1)..=last_row {
        for col in 0..sheet.col_count() {
            if let Some(text) = sheet.text(row, col) {
                awards.absorb(&text);
                if awards.is_complete() {
                    return awards;
                }
            }
        }
    }

    awards
}

#[cfg(test)]
mod tests {
    use calamine::Data;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sheet::sheet_from_rows;

    fn marker(round: u32) -> Vec<Data> {
        vec![Data::String(format!("{round}라운드 누적 리그 결과"))]
    }

    fn team_row(name: &str, record: &str, points: f64) -> Vec<Data> {
        vec![
            Data::Empty,
            Data::String(name.to_owned()),
            Data::String(record.to_owned()),
            Data::Float(points),
        ]
    }

    fn award_row(text: &str) -> Vec<Data> {
        vec![Data::Empty, Data::String(text.to_owned())]
    }

    fn round_block(round: u32, points: [f64; 3]) -> Vec<Vec<Data>> {
        vec![
            marker(round),
            vec![Data::Empty],
            team_row("화이트", "2승 1패", points[0]),
            team_row("블랙", "1승 2패", points[1]),
            team_row("레드", "3승", points[2]),
        ]
    }

    #[test]
    fn extracts_standings_rows_for_known_teams() {
        let mut rows = round_block(3, [7.0, 4.0, 9.0]);
        rows.push(team_row("그린", "9승", 99.0)); // outside the closed set

        let mut warnings = Vec::new();
        let sheet = sheet_from_rows("GBL 승점", &rows);
        let rounds = extract_rounds(&sheet, &mut warnings).unwrap();

        assert_eq!(rounds.len(), 1);
        let record = &rounds[0];
        assert_eq!(record.round, 3);
        assert_eq!(record.teams.len(), 3);
        assert_eq!(record.teams[0].code, "white");
        assert_eq!(record.teams[0].wins, 2);
        assert_eq!(record.teams[0].losses, 1);
        assert_eq!(record.teams[2].record_text, "3승");
        assert_eq!(record.teams[2].wins, 3);
        assert_eq!(record.teams[2].losses, 0);
        assert_eq!(record.teams[2].points, 9.0);
    }

    #[test]
    fn unknown_team_inside_the_block_is_warned_and_skipped() {
        let mut rows = vec![marker(1), vec![Data::Empty]];
        rows.push(team_row("화이트", "1승", 3.0));
        rows.push(team_row("게스트", "5승", 15.0));
        rows.push(team_row("레드", "1패", 0.0));

        let mut warnings = Vec::new();
        let sheet = sheet_from_rows("GBL 승점", &rows);
        let rounds = extract_rounds(&sheet, &mut warnings).unwrap();

        assert_eq!(rounds[0].teams.len(), 2);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn awards_are_collected_from_the_window_first_match_wins() {
        let mut rows = round_block(2, [4.0, 4.0, 4.0]);
        rows.push(award_row("👑MOM: 권인회"));
        rows.push(award_row("더블더블: 김민수"));
        rows.push(award_row("오늘 득점왕: 강재훈(66점)"));
        rows.push(award_row("MOM: 나중사람"));

        let mut warnings = Vec::new();
        let sheet = sheet_from_rows("GBL 승점", &rows);
        let rounds = extract_rounds(&sheet, &mut warnings).unwrap();

        let awards = &rounds[0].awards;
        assert_eq!(awards.mom.as_deref(), Some("권인회"));
        assert_eq!(awards.double_double.as_deref(), Some("김민수"));
        let top = awards.top_scorer.as_ref().unwrap();
        assert_eq!(top.name, "강재훈");
        assert_eq!(top.points, 66);
    }

    #[test]
    fn awards_outside_the_window_are_ignored() {
        let mut rows = round_block(1, [1.0, 1.0, 1.0]);
        // Pad past the 15-row window before the announcement.
        while rows.len() < 17 {
            rows.push(vec![Data::Empty]);
        }
        rows.push(award_row("MOM: 늦은발표"));

        let mut warnings = Vec::new();
        let sheet = sheet_from_rows("GBL 승점", &rows);
        let rounds = extract_rounds(&sheet, &mut warnings).unwrap();

        assert_eq!(rounds[0].awards, RoundAwards::default());
    }

    #[test]
    fn multiple_blocks_are_emitted_in_scan_order() {
        let mut rows = round_block(2, [1.0, 2.0, 3.0]);
        rows.extend(round_block(1, [4.0, 5.0, 6.0]));

        let mut warnings = Vec::new();
        let sheet = sheet_from_rows("GBL 승점", &rows);
        let rounds = extract_rounds(&sheet, &mut warnings).unwrap();

        let order: Vec<u32> = rounds.iter().map(|r| r.round).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn missing_record_and_points_cells_default() {
        let rows = vec![
            marker(1),
            vec![Data::Empty],
            vec![Data::Empty, Data::String("화이트".to_owned())],
        ];

        let mut warnings = Vec::new();
        let sheet = sheet_from_rows("GBL 승점", &rows);
        let rounds = extract_rounds(&sheet, &mut warnings).unwrap();

        let team = &rounds[0].teams[0];
        assert_eq!(team.record_text, "0승 0패");
        assert_eq!((team.wins, team.losses), (0, 0));
        assert_eq!(team.points, 0.0);
    }
}
