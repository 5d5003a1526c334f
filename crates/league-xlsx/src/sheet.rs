use calamine::{Data, Range};

use crate::ImportError;

/// A worksheet wrapper exposing typed, absolute 0-based cell access over the
/// used range reported by calamine.
///
/// Numeric readers coerce empty cells to zero (the template leaves cells
/// blank for "no data"), but a non-empty cell that fails to parse is a hard
/// [`ImportError::MalformedCell`] rather than a silent zero.
pub struct Sheet {
    name: String,
    range: Range<Data>,
}

impl Sheet {
    pub(crate) fn new(name: String, range: Range<Data>) -> Self {
        Self { name, range }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rows in the used area, header rows included.
    pub fn row_count(&self) -> u32 {
        self.range.end().map_or(0, |(row, _)| row + 1)
    }

    pub fn col_count(&self) -> u32 {
        self.range.end().map_or(0, |(_, col)| col + 1)
    }

    fn data(&self, row: u32, col: u32) -> &Data {
        self.range.get_value((row, col)).unwrap_or(&Data::Empty)
    }

    pub fn is_empty_cell(&self, row: u32, col: u32) -> bool {
        match self.data(row, col) {
            Data::Empty => true,
            Data::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Cell text, trimmed; `None` for empty cells. Numeric cells render in
    /// their natural display form (integral floats without the `.0`).
    pub fn text(&self, row: u32, col: u32) -> Option<String> {
        match self.data(row, col) {
            Data::Empty => None,
            Data::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Data::Int(v) => Some(v.to_string()),
            Data::Float(v) => {
                if v.fract() == 0.0 {
                    Some(format!("{v:.0}"))
                } else {
                    Some(v.to_string())
                }
            }
            other => Some(other.to_string()),
        }
    }

    /// Integer cell: empty coerces to 0; anything non-empty that does not
    /// parse as a number fails loudly.
    pub fn integer(&self, row: u32, col: u32) -> Result<i64, ImportError> {
        match self.data(row, col) {
            Data::Empty => Ok(0),
            Data::Int(v) => Ok(*v),
            Data::Float(v) => Ok(*v as i64),
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed
                    .parse::<i64>()
                    .or_else(|_| trimmed.parse::<f64>().map(|v| v as i64))
                    .map_err(|_| self.malformed(row, col))
            }
            _ => Err(self.malformed(row, col)),
        }
    }

    /// Floating-point cell with the same empty/garbage policy as [`integer`](Self::integer).
    pub fn number(&self, row: u32, col: u32) -> Result<f64, ImportError> {
        match self.data(row, col) {
            Data::Empty => Ok(0.0),
            Data::Int(v) => Ok(*v as f64),
            Data::Float(v) => Ok(*v),
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| self.malformed(row, col))
            }
            _ => Err(self.malformed(row, col)),
        }
    }

    fn malformed(&self, row: u32, col: u32) -> ImportError {
        // Rows/columns are reported 1-based, matching what users see in the
        // spreadsheet UI.
        ImportError::MalformedCell {
            sheet: self.name.clone(),
            row: row + 1,
            col: col + 1,
            value: self.data(row, col).to_string(),
        }
    }
}

/// Build a [`Sheet`] from literal rows. Test-only.
#[cfg(test)]
pub(crate) fn sheet_from_rows(name: &str, rows: &[Vec<Data>]) -> Sheet {
    let max_rows = rows.len().max(1) as u32;
    let max_cols = rows.iter().map(|row| row.len()).max().unwrap_or(0).max(1) as u32;

    let mut range = Range::new((0, 0), (max_rows - 1, max_cols - 1));
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if !matches!(value, Data::Empty) {
                range.set_value((row_idx as u32, col_idx as u32), value.clone());
            }
        }
    }

    Sheet::new(name.to_owned(), range)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Sheet {
        sheet_from_rows(
            "테스트",
            &[
                vec![
                    Data::String("이름".to_owned()),
                    Data::Int(7),
                    Data::Float(8.5),
                    Data::String("  ".to_owned()),
                ],
                vec![
                    Data::Empty,
                    Data::String(" 12 ".to_owned()),
                    Data::String("abc".to_owned()),
                    Data::Float(3.0),
                ],
            ],
        )
    }

    #[test]
    fn text_trims_and_skips_blank_cells() {
        let sheet = sample();

        assert_eq!(sheet.text(0, 0).as_deref(), Some("이름"));
        assert_eq!(sheet.text(0, 3), None);
        assert_eq!(sheet.text(1, 0), None);
        assert_eq!(sheet.text(1, 3).as_deref(), Some("3"));
    }

    #[test]
    fn numeric_readers_coerce_empty_to_zero() {
        let sheet = sample();

        assert_eq!(sheet.integer(1, 0).unwrap(), 0);
        assert_eq!(sheet.number(1, 0).unwrap(), 0.0);
        assert_eq!(sheet.integer(0, 3).unwrap(), 0);
    }

    #[test]
    fn numeric_readers_parse_numbers_and_numeric_strings() {
        let sheet = sample();

        assert_eq!(sheet.integer(0, 1).unwrap(), 7);
        assert_eq!(sheet.number(0, 2).unwrap(), 8.5);
        assert_eq!(sheet.integer(1, 1).unwrap(), 12);
    }

    #[test]
    fn garbage_in_a_numeric_cell_fails_loudly() {
        let sheet = sample();

        let err = sheet.integer(1, 2).unwrap_err();
        match err {
            ImportError::MalformedCell {
                sheet, row, col, value,
            } => {
                assert_eq!(sheet, "테스트");
                assert_eq!((row, col), (2, 3));
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
