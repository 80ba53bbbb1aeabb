use super::traits::ConfigSection;
use crate::error::CopybenchError;
use serde::{Deserialize, Serialize};

/// Selects the symbol codec and the reference predictor driven by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    pub codec: CodecKind,
    pub kind: PredictorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    OneHot,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PredictorKind {
    DelayLine,
    Constant { symbol: usize },
    Transition,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            codec: CodecKind::OneHot,
            kind: PredictorKind::DelayLine,
        }
    }
}

impl PredictorConfig {
    /// Checks the choice against the alphabet it will be used with
    pub fn validate_for(&self, alphabet_size: usize) -> Result<(), CopybenchError> {
        self.validate()?;
        if let PredictorKind::Constant { symbol } = self.kind {
            if symbol >= alphabet_size {
                return Err(CopybenchError::Configuration(format!(
                    "Constant predictor symbol {} is outside alphabet of size {}",
                    symbol, alphabet_size
                )));
            }
        }
        Ok(())
    }
}

impl ConfigSection for PredictorConfig {
    fn validate(&self) -> Result<(), CopybenchError> {
        if self.kind == PredictorKind::Transition && self.codec != CodecKind::OneHot {
            return Err(CopybenchError::Configuration(
                "Transition predictor requires the one_hot codec".to_string()
            ));
        }
        Ok(())
    }
}
