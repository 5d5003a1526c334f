//! Fixed template geometry for the league workbook.
//!
//! The converter is deliberately coupled to one organization's spreadsheet
//! template; every extractor reads its positions from this module so a
//! template change is a one-place edit. Coordinates are 0-based (the
//! template's column letters are noted where useful).

/// Required scoring worksheet.
pub const SCORING_SHEET: &str = "전체득점";
/// Required additional-stats worksheet.
pub const ADDITIONAL_SHEET: &str = "부가기록 계산";
/// Optional league-points worksheet (per-round standings and awards).
pub const STANDINGS_SHEET: &str = "GBL 승점";

/// Scoring sheet (`전체득점`) geometry.
pub mod scoring {
    /// Column A: team name. Merged cells, so only the first row of each team
    /// block carries a value.
    pub const TEAM: u32 = 0;
    /// Column B: player name.
    pub const NAME: u32 = 1;
    /// Column C: jersey number.
    pub const NUMBER: u32 = 2;
    /// Column S: attendance count.
    pub const ATTENDANCE: u32 = 18;
    /// Column T: cumulative score.
    pub const TOTAL_SCORE: u32 = 19;
    /// Column V: per-game average score.
    pub const AVG_SCORE: u32 = 21;
    /// Row 0 is the header; data starts here.
    pub const FIRST_DATA_ROW: u32 = 1;
}

/// Additional-stats sheet (`부가기록 계산`) geometry.
pub mod additional {
    /// Column A: player name.
    pub const NAME: u32 = 0;
    /// Column B: jersey number.
    pub const NUMBER: u32 = 1;
    /// Columns C..G: cumulative rebounds, assists, steals, blocks, 3PT.
    pub const FIRST_CUMULATIVE: u32 = 2;
    /// Columns H..L: the matching per-game averages, same category order.
    pub const FIRST_AVERAGE: u32 = 7;
    /// Three header rows precede the data.
    pub const FIRST_DATA_ROW: u32 = 3;
}

/// League-points sheet (`GBL 승점`) geometry.
pub mod standings {
    /// Round-summary markers are only recognized in column A.
    pub const MARKER_COL: u32 = 0;
    pub const TEAM_NAME_COL: u32 = 1;
    pub const RECORD_COL: u32 = 2;
    pub const POINTS_COL: u32 = 3;
    /// Standings rows sit at these fixed offsets below a round marker.
    pub const TEAM_ROW_OFFSETS: [u32; 3] = [2, 3, 4];
    /// Award announcements are searched this many rows past the marker.
    pub const AWARD_WINDOW_ROWS: u32 = 15;
}

/// The closed three-team set of the league, as `(code, sheet name)` pairs.
/// Standings rows whose team cell does not exactly equal one of these names
/// are ignored.
pub const TEAMS: [(&str, &str); 3] = [("white", "화이트"), ("black", "블랙"), ("red", "레드")];

/// Look up the stable team code for a sheet team name.
pub fn team_code(name: &str) -> Option<&'static str> {
    TEAMS
        .iter()
        .find(|(_, team_name)| *team_name == name)
        .map(|(code, _)| *code)
}
