use config::{Config, ConfigError, Environment, File};
use isl_ml::TrainerConfig;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub model: ModelConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub team_stats_path: String,
    pub matches_path: String,
    pub logos_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub artifact_path: String,
    pub penalty: f64,
    pub l1_ratio: f64,
    pub max_iterations: u32,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub window: usize,
}

impl AppConfig {
    pub fn new(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let trainer = TrainerConfig::default();

        let mut builder = Config::builder()
            // Start with default values
            .set_default("data.team_stats_path", "team_data.csv")?
            .set_default("data.matches_path", "isl_matches.csv")?
            .set_default("data.logos_dir", "assets/logos")?
            .set_default("model.artifact_path", "model.json")?
            .set_default("model.penalty", trainer.penalty)?
            .set_default("model.l1_ratio", trainer.l1_ratio)?
            .set_default("model.max_iterations", i64::from(trainer.max_iterations))?
            .set_default("model.tolerance", trainer.tolerance)?
            .set_default("form.window", 5)?
            // Add in settings from configuration files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Add in settings from environment variables, e.g. ISL__MODEL__ARTIFACT_PATH
        let config = builder
            .add_source(Environment::with_prefix("ISL").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn trainer_config(&self) -> TrainerConfig {
        TrainerConfig {
            penalty: self.model.penalty,
            l1_ratio: self.model.l1_ratio,
            max_iterations: self.model.max_iterations,
            tolerance: self.model.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new(None).unwrap();
        assert_eq!(config.data.team_stats_path, "team_data.csv");
        assert_eq!(config.data.matches_path, "isl_matches.csv");
        assert_eq!(config.model.artifact_path, "model.json");
        assert_eq!(config.form.window, 5);
        assert_eq!(config.trainer_config().max_iterations, 1000);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[form]\nwindow = 3\n\n[model]\nartifact_path = \"out/model.json\"\n")
            .unwrap();

        let config = AppConfig::new(path.to_str()).unwrap();
        assert_eq!(config.form.window, 3);
        assert_eq!(config.model.artifact_path, "out/model.json");
        assert_eq!(config.data.logos_dir, "assets/logos");
    }
}
