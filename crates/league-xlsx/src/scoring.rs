//! Extraction from the scoring sheet (`전체득점`): per-player rows plus the
//! round-count and fallback current-round heuristics over the header row.

use std::sync::OnceLock;

use league_model::{round1dp, PlayerBasic};
use regex::Regex;

use crate::layout::scoring as cols;
use crate::sheet::Sheet;
use crate::ImportError;

/// Walk the scoring sheet top to bottom and emit one [`PlayerBasic`] per
/// player row, in sheet order.
///
/// The team column uses merged cells, so its value is carried forward across
/// blank cells. Rows missing a name or number are spacer/header rows and are
/// skipped, not errors.
pub fn extract_players(sheet: &Sheet) -> Result<Vec<PlayerBasic>, ImportError> {
    let mut players = Vec::new();
    let mut current_team: Option<String> = None;

    for row in cols::FIRST_DATA_ROW..sheet.row_count() {
        if let Some(team) = sheet.text(row, cols::TEAM) {
            current_team = Some(team);
        }

        let Some(name) = sheet.text(row, cols::NAME) else {
            continue;
        };
        if sheet.is_empty_cell(row, cols::NUMBER) {
            continue;
        }
        let number = sheet.integer(row, cols::NUMBER)?;

        let Some(team) = current_team.clone() else {
            return Err(ImportError::MissingTeam {
                sheet: sheet.name().to_owned(),
                row: row + 1,
            });
        };

        let attendance = sheet.integer(row, cols::ATTENDANCE)?;
        let total_score = sheet.integer(row, cols::TOTAL_SCORE)?;
        let avg_score = round1dp(sheet.number(row, cols::AVG_SCORE)?);

        players.push(PlayerBasic {
            team,
            name,
            number,
            attendance,
            total_score,
            avg_score,
        });
    }

    Ok(players)
}

fn round_header_exact() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+라운드$").expect("valid regex"))
}

fn round_header_loose() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)라운드").expect("valid regex"))
}

/// Count round columns in the header row.
///
/// Only cells that are exactly `<digits>라운드` count; a substring match
/// would also pick up summary columns like `라운드 합계`.
pub fn count_rounds(sheet: &Sheet) -> u32 {
    let mut count = 0;
    for col in 0..sheet.col_count() {
        if let Some(header) = sheet.text(0, col) {
            if round_header_exact().is_match(&header) {
                count += 1;
            }
        }
    }
    count
}

/// Infer the in-progress round from the scoring sheet alone. Used only when
/// the league-points sheet is absent.
///
/// Column location uses loose containment on purpose (a `N라운드 합계`
/// column can legitimately carry a value in the first data row), but the
/// round number still comes from the leading digits. The answer is the
/// highest round whose column is populated in the first data row.
pub fn fallback_current_round(sheet: &Sheet) -> u32 {
    let mut current = 0;
    for col in 0..sheet.col_count() {
        let Some(header) = sheet.text(0, col) else {
            continue;
        };
        let Some(captures) = round_header_loose().captures(&header) else {
            continue;
        };
        let Ok(round) = captures[1].parse::<u32>() else {
            continue;
        };
        if round > current && !sheet.is_empty_cell(cols::FIRST_DATA_ROW, col) {
            current = round;
        }
    }
    current
}
