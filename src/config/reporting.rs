use super::traits::ConfigSection;
use crate::error::CopybenchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    pub console: bool,
    pub log_every: usize,
    pub report_path: Option<PathBuf>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            console: true,
            log_every: 100,
            report_path: None,
        }
    }
}

impl ConfigSection for ReportingConfig {
    fn validate(&self) -> Result<(), CopybenchError> {
        if self.log_every == 0 {
            return Err(CopybenchError::Configuration(
                "log_every must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
