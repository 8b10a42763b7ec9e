// Score prediction models

use chrono::{DateTime, Utc};
use isl_models::{
    FeatureVector, IslError, Result, ScorePrediction, FEATURE_COUNT, FEATURE_NAMES, TARGET_COUNT,
};
use linfa::prelude::*;
use linfa_elasticnet::MultiTaskElasticNet;
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info};

use crate::training::{SyntheticDataset, TrainerConfig};

/// Anything that maps an 8-wide feature vector to two expected goal counts.
pub trait PredictionModel {
    fn model_name(&self) -> &str;
    fn model_version(&self) -> &str;

    /// Real-valued `[home, away]` output.
    fn predict_raw(&self, features: &FeatureVector) -> Result<[f64; TARGET_COUNT]>;

    /// Rounded scoreline. Negative outputs are passed through unclamped.
    fn predict(&self, features: &FeatureVector) -> Result<ScorePrediction> {
        let [home, away] = self.predict_raw(features)?;
        Ok(ScorePrediction::new(
            features.home_team.clone(),
            features.away_team.clone(),
            self.model_name().to_string(),
            self.model_version().to_string(),
            home,
            away,
        ))
    }
}

/// Multi-output linear regressor persisted as the model artifact.
///
/// Both targets are fit jointly with a multi-task elastic net; only the
/// fitted hyperplane (`8 x 2`) and intercept are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRegressor {
    name: String,
    version: String,
    trained_at: DateTime<Utc>,
    feature_names: Vec<String>,
    n_samples: usize,
    weights: Array2<f64>,
    intercept: Array1<f64>,
}

impl ScoreRegressor {
    pub const MODEL_NAME: &'static str = "MultiTaskElasticNet";
    pub const MODEL_VERSION: &'static str = "v1.0";

    pub fn fit(dataset: &SyntheticDataset, config: &TrainerConfig) -> Result<Self> {
        let training = DatasetBase::new(dataset.records.clone(), dataset.targets.clone());

        let fitted = MultiTaskElasticNet::<f64>::params()
            .penalty(config.penalty)
            .l1_ratio(config.l1_ratio)
            .max_iterations(config.max_iterations)
            .tolerance(config.tolerance)
            .fit(&training)
            .map_err(|e| IslError::TrainingFailed {
                reason: e.to_string(),
            })?;

        Self::from_parts(
            fitted.hyperplane().clone(),
            fitted.intercept().clone(),
            dataset.len(),
        )
    }

    /// Builds a regressor from explicit coefficients, checking their shape.
    pub fn from_parts(weights: Array2<f64>, intercept: Array1<f64>, n_samples: usize) -> Result<Self> {
        let model = Self {
            name: Self::MODEL_NAME.to_string(),
            version: Self::MODEL_VERSION.to_string(),
            trained_at: Utc::now(),
            feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            n_samples,
            weights,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        let (rows, cols) = self.weights.dim();
        if rows != FEATURE_COUNT || cols != TARGET_COUNT || self.intercept.len() != TARGET_COUNT {
            return Err(IslError::ModelShape {
                rows,
                cols,
                expected_rows: FEATURE_COUNT,
                expected_cols: TARGET_COUNT,
            });
        }
        Ok(())
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn intercept(&self) -> &Array1<f64> {
        &self.intercept
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        info!("Model saved to {}", path.display());
        Ok(())
    }

    /// Loads an artifact. Only the coefficient shape is checked; the
    /// feature semantics are trusted to match the current code.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let model: Self = serde_json::from_reader(reader)?;
        model.validate()?;
        debug!(
            trained_at = %model.trained_at,
            samples = model.n_samples,
            "Model loaded from {}",
            path.display()
        );
        Ok(model)
    }
}

impl PredictionModel for ScoreRegressor {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn model_version(&self) -> &str {
        &self.version
    }

    fn predict_raw(&self, features: &FeatureVector) -> Result<[f64; TARGET_COUNT]> {
        let x = ArrayView1::from(&features.values[..]);
        let output = self.weights.t().dot(&x) + &self.intercept;
        Ok([output[0], output[1]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isl_models::TeamStats;
    use ndarray::arr1;

    fn league() -> Vec<TeamStats> {
        vec![
            TeamStats::new("Mumbai City", 1.8, 2.9, 56.1, 38.0),
            TeamStats::new("Mohun Bagan", 1.7, 2.6, 52.4, 44.0),
            TeamStats::new("Goa", 1.5, 2.4, 54.0, 41.0),
            TeamStats::new("Odisha", 1.3, 2.0, 49.5, 47.0),
            TeamStats::new("Kerala Blasters", 1.2, 1.9, 51.2, 52.0),
            TeamStats::new("Hyderabad", 0.6, 0.9, 42.3, 35.0),
        ]
    }

    fn fit_league() -> ScoreRegressor {
        let dataset = SyntheticDataset::generate(&league());
        ScoreRegressor::fit(&dataset, &TrainerConfig::default()).unwrap()
    }

    #[test]
    fn test_fit_produces_expected_shape() {
        let model = fit_league();
        assert_eq!(model.weights().dim(), (FEATURE_COUNT, TARGET_COUNT));
        assert_eq!(model.intercept().len(), TARGET_COUNT);
        assert_eq!(model.n_samples(), 30);
        assert_eq!(model.model_name(), "MultiTaskElasticNet");
        assert_eq!(model.model_version(), "v1.0");
    }

    #[test]
    fn test_stronger_attack_predicts_more_goals() {
        let model = fit_league();
        let teams = league();
        let features = FeatureVector::from_teams(&teams[0], &teams[5]);

        let [home, away] = model.predict_raw(&features).unwrap();
        assert!(home.is_finite() && away.is_finite());
        assert!(home > away);
    }

    #[test]
    fn test_save_and_load_preserve_predictions() {
        let model = fit_league();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        model.save(&path).unwrap();
        let loaded = ScoreRegressor::load(&path).unwrap();

        let teams = league();
        let features = FeatureVector::from_teams(&teams[1], &teams[3]);
        let before = model.predict_raw(&features).unwrap();
        let after = loaded.predict_raw(&features).unwrap();
        assert!((before[0] - after[0]).abs() < 1e-9);
        assert!((before[1] - after[1]).abs() < 1e-9);
        assert_eq!(loaded.n_samples(), model.n_samples());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = ScoreRegressor::from_parts(Array2::zeros((4, 2)), arr1(&[0.0, 0.0]), 0);
        assert!(matches!(
            result,
            Err(IslError::ModelShape { rows: 4, cols: 2, .. })
        ));
    }

    #[test]
    fn test_negative_output_is_rounded_not_clamped() {
        let model =
            ScoreRegressor::from_parts(Array2::zeros((FEATURE_COUNT, TARGET_COUNT)), arr1(&[-1.2, 0.4]), 0)
                .unwrap();
        let a = TeamStats::new("A", 1.0, 1.5, 55.0, 2.0);
        let b = TeamStats::new("B", 0.5, 0.8, 45.0, 4.0);

        let prediction = model.predict(&FeatureVector::from_teams(&a, &b)).unwrap();
        assert_eq!(prediction.scoreline(), (-1, 0));
        assert!(!prediction.is_non_negative());
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        assert!(matches!(
            ScoreRegressor::load("/nonexistent/model.json"),
            Err(IslError::Io(_))
        ));
    }
}
