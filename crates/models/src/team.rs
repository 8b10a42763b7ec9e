use serde::{Deserialize, Serialize};

/// Column names of the four statistics, in feature order.
pub const STAT_COLUMNS: [&str; 4] = ["Gls.1", "G+A.1", "Poss", "CrdY"];

/// One row of the season stats table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamStats {
    #[serde(rename = "Squad")]
    pub name: String,
    /// Goals per 90 minutes.
    #[serde(rename = "Gls.1")]
    pub goals_per90: f64,
    /// Goals plus assists per 90 minutes.
    #[serde(rename = "G+A.1")]
    pub goals_assists_per90: f64,
    /// Average possession, in percent.
    #[serde(rename = "Poss")]
    pub possession: f64,
    /// Yellow cards over the season.
    #[serde(rename = "CrdY")]
    pub yellow_cards: f64,
}

impl TeamStats {
    pub fn new(
        name: impl Into<String>,
        goals_per90: f64,
        goals_assists_per90: f64,
        possession: f64,
        yellow_cards: f64,
    ) -> Self {
        Self {
            name: name.into(),
            goals_per90,
            goals_assists_per90,
            possession,
            yellow_cards,
        }
    }

    /// The four statistics in `STAT_COLUMNS` order.
    pub fn stats(&self) -> [f64; 4] {
        [
            self.goals_per90,
            self.goals_assists_per90,
            self.possession,
            self.yellow_cards,
        ]
    }

    /// Attacking output used by the synthetic labels: `Gls.1 + G+A.1`.
    pub fn attacking_output(&self) -> f64 {
        self.goals_per90 + self.goals_assists_per90
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_order_matches_columns() {
        let team = TeamStats::new("Mumbai City", 1.0, 1.5, 55.0, 2.0);
        assert_eq!(team.stats(), [1.0, 1.5, 55.0, 2.0]);
        assert_eq!(STAT_COLUMNS.len(), team.stats().len());
    }

    #[test]
    fn test_attacking_output() {
        let team = TeamStats::new("Goa", 0.5, 0.8, 45.0, 4.0);
        assert!((team.attacking_output() - 1.3).abs() < 1e-9);
    }
}
