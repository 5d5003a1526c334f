//! Per-round award extraction from free-text announcement cells.
//!
//! Each award type has its own matcher returning an `Option`, and the
//! matchers are combined via [`RoundAwards::absorb`]. Keeping the rules
//! independent (rather than one monolithic regex) keeps each one testable in
//! isolation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Decorative characters sheet authors sprinkle around award announcements.
/// Stripped before matching so `"👑MOM: 권인회"` still parses.
const DECORATIONS: &[char] = &['👑', '🏆', '🏀', '🔥', '⭐', '✨', '🎉'];

/// The top-scorer award: name plus the announced point total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScorer {
    pub name: String,
    pub points: u32,
}

/// Awards announced in one round-summary block. All optional; absent awards
/// are omitted from the JSON document entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundAwards {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_double: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_scorer: Option<TopScorer>,
}

impl RoundAwards {
    /// Run every matcher against `text`. The first match of each award type
    /// wins; later matches within the same scan window never overwrite.
    pub fn absorb(&mut self, text: &str) {
        if self.mom.is_none() {
            self.mom = extract_mom(text);
        }
        if self.double_double.is_none() {
            self.double_double = extract_double_double(text);
        }
        if self.top_scorer.is_none() {
            self.top_scorer = extract_top_scorer(text);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.mom.is_some() && self.double_double.is_some() && self.top_scorer.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.mom.is_none() && self.double_double.is_none() && self.top_scorer.is_none()
    }
}

fn strip_decorations(text: &str) -> String {
    text.chars().filter(|c| !DECORATIONS.contains(c)).collect()
}

/// `"👑MOM: 권인회"` → `Some("권인회")`.
pub fn extract_mom(text: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"MOM:\s*(\S.*)").expect("valid regex"));

    let cleaned = strip_decorations(text);
    re.captures(&cleaned)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// `"더블더블: 김민수"` → `Some("김민수")`.
pub fn extract_double_double(text: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"더블더블:\s*(\S.*)").expect("valid regex"));

    let cleaned = strip_decorations(text);
    re.captures(&cleaned)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// `"오늘 득점왕: 강재훈(66점)"` → `Some(TopScorer { name: "강재훈", points: 66 })`.
pub fn extract_top_scorer(text: &str) -> Option<TopScorer> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"득점왕:\s*(.+?)\s*\((\d+)점\)").expect("valid regex"));

    let cleaned = strip_decorations(text);
    let captures = re.captures(&cleaned)?;
    let name = captures.get(1)?.as_str().trim().to_owned();
    let points = captures.get(2)?.as_str().parse().ok()?;
    Some(TopScorer { name, points })
}
