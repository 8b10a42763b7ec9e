use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::error::{IslError, Result};
use crate::team::TeamStats;

pub const FEATURE_COUNT: usize = 8;
pub const TARGET_COUNT: usize = 2;

/// Feature names in model input order: home stats then away stats.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "home_gls_per90",
    "home_ga_per90",
    "home_possession",
    "home_yellow_cards",
    "away_gls_per90",
    "away_ga_per90",
    "away_possession",
    "away_yellow_cards",
];

/// The 8-wide model input for one fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    pub home_team: String,
    pub away_team: String,
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_teams(home: &TeamStats, away: &TeamStats) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        values[..4].copy_from_slice(&home.stats());
        values[4..].copy_from_slice(&away.stats());

        Self {
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            values,
        }
    }

    pub fn from_slice(home_team: String, away_team: String, values: &[f64]) -> Result<Self> {
        let values: [f64; FEATURE_COUNT] =
            values.try_into().map_err(|_| IslError::InvalidFeatureWidth {
                expected: FEATURE_COUNT,
                actual: values.len(),
            })?;

        Ok(Self {
            home_team,
            away_team,
            values,
        })
    }

    pub fn home_stats(&self) -> &[f64] {
        &self.values[..4]
    }

    pub fn away_stats(&self) -> &[f64] {
        &self.values[4..]
    }
}

/// Rounded scoreline produced by a model.
///
/// Scores are rounded half-to-even but never clamped, so a model whose raw
/// output dips below zero yields a negative score here. Training labels are
/// clamped at zero; inference is not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorePrediction {
    pub id: Uuid,
    pub home_team: String,
    pub away_team: String,
    pub model_name: String,
    pub model_version: String,
    pub raw_home: f64,
    pub raw_away: f64,
    pub home_score: i64,
    pub away_score: i64,
    pub prediction_timestamp: DateTime<Utc>,
}

impl ScorePrediction {
    pub fn new(
        home_team: String,
        away_team: String,
        model_name: String,
        model_version: String,
        raw_home: f64,
        raw_away: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team,
            away_team,
            model_name,
            model_version,
            raw_home,
            raw_away,
            home_score: raw_home.round_ties_even() as i64,
            away_score: raw_away.round_ties_even() as i64,
            prediction_timestamp: Utc::now(),
        }
    }

    pub fn scoreline(&self) -> (i64, i64) {
        (self.home_score, self.away_score)
    }

    pub fn is_non_negative(&self) -> bool {
        self.home_score >= 0 && self.away_score >= 0
    }

    pub fn outcome(&self) -> PredictedOutcome {
        if self.home_score > self.away_score {
            PredictedOutcome::HomeWin
        } else if self.away_score > self.home_score {
            PredictedOutcome::AwayWin
        } else {
            PredictedOutcome::Draw
        }
    }

    /// Name of the predicted winner, `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome() {
            PredictedOutcome::HomeWin => Some(&self.home_team),
            PredictedOutcome::AwayWin => Some(&self.away_team),
            PredictedOutcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PredictedOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(raw_home: f64, raw_away: f64) -> ScorePrediction {
        ScorePrediction::new(
            "Mumbai City".to_string(),
            "Goa".to_string(),
            "MultiTaskElasticNet".to_string(),
            "v1.0".to_string(),
            raw_home,
            raw_away,
        )
    }

    #[test]
    fn test_feature_vector_order() {
        let home = TeamStats::new("A", 1.0, 1.5, 55.0, 2.0);
        let away = TeamStats::new("B", 0.5, 0.8, 45.0, 4.0);
        let features = FeatureVector::from_teams(&home, &away);

        assert_eq!(features.values, [1.0, 1.5, 55.0, 2.0, 0.5, 0.8, 45.0, 4.0]);
        assert_eq!(features.home_stats(), &[1.0, 1.5, 55.0, 2.0]);
        assert_eq!(features.away_stats(), &[0.5, 0.8, 45.0, 4.0]);
    }

    #[test]
    fn test_feature_width_is_checked() {
        let result = FeatureVector::from_slice("A".into(), "B".into(), &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(IslError::InvalidFeatureWidth { expected: 8, actual: 3 })
        ));
    }

    #[test]
    fn test_prediction_rounding() {
        let p = prediction(2.4, 0.6);
        assert_eq!(p.scoreline(), (2, 1));
        assert_eq!(p.outcome(), PredictedOutcome::HomeWin);
        assert_eq!(p.winner(), Some("Mumbai City"));

        // Half-way values round to even
        let p = prediction(2.5, 1.5);
        assert_eq!(p.scoreline(), (2, 2));
        assert_eq!(p.outcome(), PredictedOutcome::Draw);
        assert_eq!(p.winner(), None);
    }

    #[test]
    fn test_negative_output_is_not_clamped() {
        let p = prediction(-0.8, 1.2);
        assert_eq!(p.scoreline(), (-1, 1));
        assert!(!p.is_non_negative());
        assert_eq!(p.outcome(), PredictedOutcome::AwayWin);
    }
}
