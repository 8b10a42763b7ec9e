use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    /// Classifies a result from the point of view of the side that scored `goals_for`.
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => FormResult::Win,
            Ordering::Less => FormResult::Loss,
            Ordering::Equal => FormResult::Draw,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
        }
    }
}

impl fmt::Display for FormResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One past match from a single team's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormEntry {
    pub result: FormResult,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl FormEntry {
    pub fn new(goals_for: u32, goals_against: u32) -> Self {
        Self {
            result: FormResult::from_goals(goals_for, goals_against),
            goals_for,
            goals_against,
        }
    }
}

/// Aggregates shown under the form badges.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSummary {
    pub played: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl FormSummary {
    pub fn from_entries(entries: &[FormEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.played += 1;
            match entry.result {
                FormResult::Win => summary.wins += 1,
                FormResult::Draw => summary.draws += 1,
                FormResult::Loss => summary.losses += 1,
            }
            summary.goals_for += entry.goals_for;
            summary.goals_against += entry.goals_against;
            summary
        })
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_goals() {
        assert_eq!(FormResult::from_goals(2, 1), FormResult::Win);
        assert_eq!(FormResult::from_goals(1, 1), FormResult::Draw);
        assert_eq!(FormResult::from_goals(0, 3), FormResult::Loss);
        assert_eq!(FormResult::Win.to_string(), "W");
    }

    #[test]
    fn test_summary_totals() {
        let entries = vec![FormEntry::new(2, 0), FormEntry::new(1, 1), FormEntry::new(0, 2)];
        let summary = FormSummary::from_entries(&entries);

        assert_eq!(summary.played, 3);
        assert_eq!((summary.wins, summary.draws, summary.losses), (1, 1, 1));
        assert_eq!(summary.goals_for, 3);
        assert_eq!(summary.goals_against, 3);
        assert_eq!(summary.goal_difference(), 0);
    }

    #[test]
    fn test_result_serializes_as_letter() {
        let json = serde_json::to_string(&FormResult::Loss).unwrap();
        assert_eq!(json, "\"L\"");
    }
}
