// Recent form calculation

use isl_models::{FormEntry, MatchRecord};
use std::cmp::Ordering;
use tracing::debug;

pub const DEFAULT_FORM_WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub struct FormCalculator {
    window: usize,
}

impl Default for FormCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_WINDOW)
    }
}

/// Newest first; undated matches go last.
fn newest_first(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl FormCalculator {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Last `window` results for `team`, most recent first.
    ///
    /// `team` is compared verbatim against the normalized names stored on each
    /// record. Matches without a parseable score are skipped.
    pub fn recent_form(&self, team: &str, matches: &[MatchRecord]) -> Vec<FormEntry> {
        let mut form = Vec::with_capacity(self.window);
        if self.window == 0 {
            return form;
        }

        let mut ordered: Vec<&MatchRecord> = matches.iter().collect();
        ordered.sort_by(|a, b| newest_first(a, b));

        for record in ordered {
            let Some((home_goals, away_goals)) = record.goals() else {
                continue;
            };

            if record.home == team {
                form.push(FormEntry::new(home_goals, away_goals));
            } else if record.away == team {
                form.push(FormEntry::new(away_goals, home_goals));
            }

            if form.len() == self.window {
                break;
            }
        }

        debug!(team, found = form.len(), "Computed recent form");
        form
    }
}
