use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonCodeError {
    #[error("invalid season code `{0}`: expected exactly 6 digits in YYYYMM form")]
    Malformed(String),
    #[error("invalid season code `{code}`: month {month} out of range 01-12")]
    MonthOutOfRange { code: String, month: u32 },
}

/// A validated `YYYYMM` season code (e.g. `202601`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeasonCode {
    year: u32,
    month: u32,
}

impl SeasonCode {
    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Human-readable season label, month without a leading zero:
    /// `202601` → `"2026년 1월"`.
    pub fn label(&self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }
}

impl FromStr for SeasonCode {
    type Err = SeasonCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeasonCodeError::Malformed(s.to_owned()));
        }

        let year: u32 = s[..4]
            .parse()
            .map_err(|_| SeasonCodeError::Malformed(s.to_owned()))?;
        let month: u32 = s[4..]
            .parse()
            .map_err(|_| SeasonCodeError::Malformed(s.to_owned()))?;

        if !(1..=12).contains(&month) {
            return Err(SeasonCodeError::MonthOutOfRange {
                code: s.to_owned(),
                month,
            });
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for SeasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}
