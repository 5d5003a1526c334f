use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Record text substituted when the standings cell is empty.
pub const EMPTY_RECORD_TEXT: &str = "0승 0패";

/// One team's line in a round-summary block.
///
/// `record_text` is preserved verbatim alongside the parsed `wins`/`losses`
/// so the front end can display whatever the sheet author wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub code: String,
    pub name: String,
    pub record_text: String,
    pub wins: u32,
    pub losses: u32,
    pub points: f64,
}

impl TeamStanding {
    /// Build a standing from the raw cells of a standings row. A missing
    /// record cell defaults to [`EMPTY_RECORD_TEXT`].
    pub fn from_record_text(
        code: impl Into<String>,
        name: impl Into<String>,
        record_text: Option<String>,
        points: f64,
    ) -> Self {
        let record_text = record_text.unwrap_or_else(|| EMPTY_RECORD_TEXT.to_owned());
        let (wins, losses) = parse_record_text(&record_text);
        Self {
            code: code.into(),
            name: name.into(),
            record_text,
            wins,
            losses,
            points,
        }
    }
}

/// Parse `"3승 2패"`-style win/loss text.
///
/// Wins and losses are matched independently, so a partial string keeps
/// whatever matched: `"3승"` → `(3, 0)`, empty → `(0, 0)`.
pub fn parse_record_text(text: &str) -> (u32, u32) {
    static WINS_RE: OnceLock<Regex> = OnceLock::new();
    static LOSSES_RE: OnceLock<Regex> = OnceLock::new();

    let wins_re = WINS_RE.get_or_init(|| Regex::new(r"(\d+)승").expect("valid regex"));
    let losses_re = LOSSES_RE.get_or_init(|| Regex::new(r"(\d+)패").expect("valid regex"));

    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    (capture(wins_re), capture(losses_re))
}
