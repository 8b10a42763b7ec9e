use thiserror::Error;

#[derive(Error, Debug)]
pub enum IslError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Home and Away teams must be different (both were {team})")]
    SameTeamSelected { team: String },

    #[error("Invalid feature width: expected {expected}, got {actual}")]
    InvalidFeatureWidth { expected: usize, actual: usize },

    #[error("Model artifact has shape {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    ModelShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("Training failed: {reason}")]
    TrainingFailed { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IslError>;
