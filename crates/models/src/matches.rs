use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const CLUB_SUFFIX: &str = " FC";

fn score_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([0-9]+)[^0-9]+([0-9]+)").expect("score pattern is valid"))
}

/// Extracts `(home_goals, away_goals)` from a free-text score such as `"2-1"`
/// or `"3 - 0 (aet)"`.
///
/// Only the first two integer groups separated by non-digits are read; any
/// further digits are ignored. Digits are ASCII only, so other scripts'
/// numerals count as separators. Returns `None` when the text holds no such
/// pair or a group does not fit in a `u32`.
pub fn parse_score(raw: &str) -> Option<(u32, u32)> {
    let caps = score_pattern().captures(raw)?;
    let home = caps.get(1)?.as_str().parse().ok()?;
    let away = caps.get(2)?.as_str().parse().ok()?;
    Some((home, away))
}

/// Strips a trailing `" FC"` and surrounding whitespace.
///
/// Applied to match-history names only. Names in the stats table are used
/// verbatim, so a stats row stored as "Bengaluru FC" never matches any match.
pub fn normalize_team_name(name: &str) -> String {
    let trimmed = name.trim();
    trimmed
        .strip_suffix(CLUB_SUFFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// A historical fixture with its parsed result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub home: String,
    pub away: String,
    pub date: Option<NaiveDate>,
    pub score: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
}

impl MatchRecord {
    /// Builds a record, normalizing both team names and parsing the score.
    pub fn new(
        home: &str,
        away: &str,
        date: Option<NaiveDate>,
        score: impl Into<String>,
    ) -> Self {
        let score = score.into();
        let (home_goals, away_goals) = match parse_score(&score) {
            Some((h, a)) => (Some(h), Some(a)),
            None => (None, None),
        };

        Self {
            home: normalize_team_name(home),
            away: normalize_team_name(away),
            date,
            score,
            home_goals,
            away_goals,
        }
    }

    /// Both goal counts, if the score was parseable.
    pub fn goals(&self) -> Option<(u32, u32)> {
        Some((self.home_goals?, self.away_goals?))
    }

    pub fn has_result(&self) -> bool {
        self.goals().is_some()
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}
