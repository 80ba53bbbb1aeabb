use super::{
    harness::HarnessConfig,
    predictor::PredictorConfig,
    reporting::ReportingConfig,
    traits::ConfigSection,
};
use crate::error::CopybenchError;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables override file values, e.g. `COPYBENCH_HARNESS__SEED=7`
pub const ENV_PREFIX: &str = "COPYBENCH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub harness: HarnessConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl AppConfig {
    pub fn copy_task() -> Self {
        Self {
            harness: HarnessConfig::copy_task(),
            predictor: PredictorConfig::default(),
            reporting: ReportingConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), CopybenchError> {
        self.harness.validate()?;
        self.predictor.validate_for(self.harness.alphabet_size)?;
        self.reporting.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new(config: AppConfig) -> Result<Self, CopybenchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads a TOML file, then applies `COPYBENCH_*` environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CopybenchError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CopybenchError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Self::environment())
            .build()?;

        Self::from_settings(settings)
    }

    pub fn load_from_str(contents: &str) -> Result<Self, CopybenchError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .add_source(Self::environment())
            .build()?;

        Self::from_settings(settings)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_settings(settings: Config) -> Result<Self, CopybenchError> {
        let config: AppConfig = settings.try_deserialize()?;
        log::debug!("Loaded configuration: {:?}", config);
        Self::new(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CopybenchError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| CopybenchError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| CopybenchError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), CopybenchError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
