// Feature engineering

use isl_models::{FeatureVector, TeamStats, FEATURE_COUNT};
use ndarray::Array2;

/// Builds model inputs from stats rows: home stats followed by away stats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEngineer;

impl FeatureEngineer {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_features(&self, home: &TeamStats, away: &TeamStats) -> FeatureVector {
        FeatureVector::from_teams(home, away)
    }

    /// Stacks feature vectors into an `n x 8` design matrix.
    pub fn to_matrix(&self, features: &[FeatureVector]) -> Array2<f64> {
        let mut matrix = Array2::zeros((features.len(), FEATURE_COUNT));
        for (mut row, fv) in matrix.rows_mut().into_iter().zip(features) {
            row.assign(&ndarray::ArrayView1::from(&fv.values[..]));
        }
        matrix
    }
}
