// Stat comparison layout

use isl_models::TeamStats;
use serde::Serialize;

pub const COMPARISON_LABELS: [&str; 4] = ["Goals/90", "G+A/90", "Possession", "Discipline"];

const DISCIPLINE_INDEX: usize = 3;
const DISCIPLINE_CEILING: f64 = 100.0;

/// Values as displayed: discipline is shown as `100 - yellow cards` so that
/// higher is better on every bar.
pub fn display_values(stats: &TeamStats) -> [f64; 4] {
    let mut values = stats.stats();
    values[DISCIPLINE_INDEX] = DISCIPLINE_CEILING - values[DISCIPLINE_INDEX];
    values
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarSeries {
    pub team: String,
    pub values: [f64; 4],
}

/// Grouped bar layout: one group per metric, one bar per team.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonChart {
    pub labels: [&'static str; 4],
    pub home: BarSeries,
    pub away: BarSeries,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGroup {
    pub label: &'static str,
    pub home: f64,
    pub away: f64,
}

impl ComparisonChart {
    pub fn new(home: &TeamStats, away: &TeamStats) -> Self {
        Self {
            labels: COMPARISON_LABELS,
            home: BarSeries {
                team: home.name.clone(),
                values: display_values(home),
            },
            away: BarSeries {
                team: away.name.clone(),
                values: display_values(away),
            },
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = BarGroup> + '_ {
        self.labels
            .iter()
            .zip(self.home.values.iter().zip(self.away.values.iter()))
            .map(|(label, (home, away))| BarGroup {
                label: *label,
                home: *home,
                away: *away,
            })
    }

    /// Largest displayed value, used to scale bars.
    pub fn max_value(&self) -> f64 {
        self.home
            .values
            .iter()
            .chain(self.away.values.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}
