//! Extraction from the additional-stats sheet (`부가기록 계산`): a lookup
//! table from `(name, number)` to the five secondary stat categories.

use std::collections::HashMap;

use league_model::{round1dp, AdditionalStats, PlayerKey, StatPair};

use crate::layout::additional as cols;
use crate::sheet::Sheet;
use crate::{ImportError, ImportWarning};

/// Build the `(name, number)` → stats lookup table. Pure lookup, no ordering.
///
/// The composite key is assumed unique; when the sheet does contain a
/// duplicate, the later row wins and a warning is recorded rather than
/// failing the run.
pub fn extract_additional_stats(
    sheet: &Sheet,
    warnings: &mut Vec<ImportWarning>,
) -> Result<HashMap<PlayerKey, AdditionalStats>, ImportError> {
    let mut stats = HashMap::new();

    for row in cols::FIRST_DATA_ROW..sheet.row_count() {
        let Some(name) = sheet.text(row, cols::NAME) else {
            continue;
        };
        if sheet.is_empty_cell(row, cols::NUMBER) {
            continue;
        }
        let number = sheet.integer(row, cols::NUMBER)?;

        let mut cumulative = [0i64; 5];
        for (offset, slot) in cumulative.iter_mut().enumerate() {
            *slot = sheet.integer(row, cols::FIRST_CUMULATIVE + offset as u32)?;
        }

        let mut averages = [0f64; 5];
        for (offset, slot) in averages.iter_mut().enumerate() {
            *slot = round1dp(sheet.number(row, cols::FIRST_AVERAGE + offset as u32)?);
        }

        // Template category order: rebounds, assists, steals, blocks, 3PT.
        let entry = AdditionalStats {
            rebounds: StatPair::new(cumulative[0], averages[0]),
            assists: StatPair::new(cumulative[1], averages[1]),
            steals: StatPair::new(cumulative[2], averages[2]),
            blocks: StatPair::new(cumulative[3], averages[3]),
            three_pointers: StatPair::new(cumulative[4], averages[4]),
        };

        let key = PlayerKey::new(name, number);
        if stats.insert(key.clone(), entry).is_some() {
            log::warn!(
                "duplicate additional-stats row for `{}` (#{}); later row wins",
                key.name,
                key.number
            );
            warnings.push(ImportWarning::new(format!(
                "duplicate additional-stats row for `{}` (#{}); later row wins",
                key.name, key.number
            )));
        }
    }

    Ok(stats)
}
