//! `.xlsx` import layer for the GBL league converter.
//!
//! The workbook follows one organization's fixed template (three worksheets,
//! positional columns, see [`layout`]). We load computed cell values via
//! `calamine` and run row-walking extractors that populate [`league_model`]
//! types. Import is best-effort where the template tolerates gaps (blank
//! cells coerce to zero) and loud where it does not (garbage in a numeric
//! cell, a missing required worksheet).

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use league_model::{AdditionalStats, PlayerBasic, PlayerKey, RoundRecord};
use thiserror::Error;

pub mod layout;

mod additional;
mod scoring;
mod sheet;
mod standings;

pub use additional::extract_additional_stats;
pub use scoring::{count_rounds, extract_players, fallback_current_round};
pub use sheet::Sheet;
pub use standings::extract_rounds;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read workbook: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("worksheet `{name}` not found in workbook")]
    MissingSheet { name: String },
    #[error("sheet `{sheet}` row {row} column {col}: expected a number, found `{value}`")]
    MalformedCell {
        sheet: String,
        row: u32,
        col: u32,
        value: String,
    },
    #[error("sheet `{sheet}` row {row}: player row appears before any team cell")]
    MissingTeam { sheet: String, row: u32 },
}

/// A recoverable oddity noticed during import (duplicate lookup keys,
/// standings rows for unknown teams). Surfaced to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    pub message: String,
}

impl ImportWarning {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An opened league workbook with lazy, by-name worksheet access.
pub struct LeagueWorkbook {
    workbook: Xlsx<BufReader<File>>,
}

impl LeagueWorkbook {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let workbook = open_workbook(path)?;
        Ok(Self { workbook })
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.workbook.sheet_names().iter().any(|s| s == name)
    }

    /// Load a worksheet by exact, case-sensitive name. A missing sheet is
    /// only an error once it is actually requested.
    pub fn sheet(&mut self, name: &str) -> Result<Sheet, ImportError> {
        if !self.has_sheet(name) {
            return Err(ImportError::MissingSheet {
                name: name.to_owned(),
            });
        }
        let range = self.workbook.worksheet_range(name)?;
        Ok(Sheet::new(name.to_owned(), range))
    }
}

/// Everything extracted from one league workbook, before merging.
#[derive(Debug)]
pub struct LeagueImport {
    /// Scoring-sheet rows, in sheet order.
    pub players: Vec<PlayerBasic>,
    /// `(name, number)` → secondary stats lookup table.
    pub additional: HashMap<PlayerKey, AdditionalStats>,
    /// Round-summary records in scan order; `None` when the league-points
    /// sheet is absent from the workbook.
    pub rounds: Option<Vec<RoundRecord>>,
    pub total_rounds: u32,
    pub current_round: u32,
    pub warnings: Vec<ImportWarning>,
}

/// Run all extractors over the workbook at `path`.
///
/// `current_round` comes from the league-points sheet when present (the
/// highest round with a summary block); otherwise it falls back to the
/// scoring sheet's populated round columns.
pub fn import_league_workbook(path: impl AsRef<Path>) -> Result<LeagueImport, ImportError> {
    let mut workbook = LeagueWorkbook::open(path)?;
    let mut warnings = Vec::new();

    let scoring_sheet = workbook.sheet(layout::SCORING_SHEET)?;
    let players = extract_players(&scoring_sheet)?;
    let total_rounds = count_rounds(&scoring_sheet);

    let additional_sheet = workbook.sheet(layout::ADDITIONAL_SHEET)?;
    let additional = extract_additional_stats(&additional_sheet, &mut warnings)?;

    let (rounds, current_round) = if workbook.has_sheet(layout::STANDINGS_SHEET) {
        let standings_sheet = workbook.sheet(layout::STANDINGS_SHEET)?;
        let rounds = extract_rounds(&standings_sheet, &mut warnings)?;
        let current = rounds.iter().map(|r| r.round).max().unwrap_or(0);
        (Some(rounds), current)
    } else {
        (None, fallback_current_round(&scoring_sheet))
    };

    Ok(LeagueImport {
        players,
        additional,
        rounds,
        total_rounds,
        current_round,
        warnings,
    })
}
