// In-sample fit diagnostics

use isl_models::Result;
use serde::{Deserialize, Serialize};

use crate::models::PredictionModel;
use crate::training::SyntheticDataset;

/// Mean absolute error of a model on the data it was trained on.
///
/// This only reports how closely the model reproduces the synthetic labels;
/// it says nothing about real match outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitReport {
    pub n_samples: usize,
    pub mae_home: f64,
    pub mae_away: f64,
}

pub fn evaluate(model: &impl PredictionModel, dataset: &SyntheticDataset) -> Result<FitReport> {
    let mut abs_home = 0.0;
    let mut abs_away = 0.0;

    for (features, target) in dataset.features.iter().zip(dataset.targets.rows()) {
        let [home, away] = model.predict_raw(features)?;
        abs_home += (home - target[0]).abs();
        abs_away += (away - target[1]).abs();
    }

    let n = dataset.len().max(1) as f64;
    Ok(FitReport {
        n_samples: dataset.len(),
        mae_home: abs_home / n,
        mae_away: abs_away / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use isl_models::{FeatureVector, TeamStats, TARGET_COUNT};

    struct ConstantModel([f64; TARGET_COUNT]);

    impl PredictionModel for ConstantModel {
        fn model_name(&self) -> &str {
            "Constant"
        }

        fn model_version(&self) -> &str {
            "test"
        }

        fn predict_raw(&self, _features: &FeatureVector) -> Result<[f64; TARGET_COUNT]> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_mae_against_constant_model() {
        let teams = vec![
            TeamStats::new("A", 1.0, 1.5, 55.0, 2.0),
            TeamStats::new("B", 0.5, 0.8, 45.0, 4.0),
        ];
        // Labels are (2, 1) and (1, 2)
        let dataset = SyntheticDataset::generate(&teams);
        let report = evaluate(&ConstantModel([1.5, 1.5]), &dataset).unwrap();

        assert_eq!(report.n_samples, 2);
        assert!((report.mae_home - 0.5).abs() < 1e-12);
        assert!((report.mae_away - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_trained_model_tracks_labels() {
        let teams = vec![
            TeamStats::new("Mumbai City", 1.8, 2.9, 56.1, 38.0),
            TeamStats::new("Mohun Bagan", 1.7, 2.6, 52.4, 44.0),
            TeamStats::new("Goa", 1.5, 2.4, 54.0, 41.0),
            TeamStats::new("Odisha", 1.3, 2.0, 49.5, 47.0),
            TeamStats::new("Hyderabad", 0.6, 0.9, 42.3, 35.0),
        ];
        let outcome = crate::training::SyntheticTrainer::new(None).train(&teams).unwrap();
        let dataset = SyntheticDataset::generate(&teams);
        let baseline = evaluate(&ConstantModel([1.5, 1.5]), &dataset).unwrap();

        assert_eq!(outcome.report.n_samples, 20);
        assert!(outcome.report.mae_home < baseline.mae_home);
        assert!(outcome.report.mae_away < baseline.mae_away);
    }
}
