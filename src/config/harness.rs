use super::traits::ConfigSection;
use crate::engines::generation::sequence::sequence_space;
use crate::error::CopybenchError;
use crate::types::RecallMode;
use serde::{Deserialize, Serialize};

/// Benchmark protocol parameters. Every field is required when loaded from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub alphabet_size: usize,
    pub sequence_length: usize,
    pub held_out_size: usize,
    pub num_trials: usize,
    pub decay: f64,
    pub seed: u64,
    pub training_recall: RecallMode,
    pub evaluation_recall: RecallMode,
    pub max_rejections: usize,
}

impl HarnessConfig {
    /// The classic copy task: 8 digits of base 4, 10 held-out sequences, 6000 trials.
    pub fn copy_task() -> Self {
        Self {
            alphabet_size: 4,
            sequence_length: 8,
            held_out_size: 10,
            num_trials: 6000,
            decay: 0.99,
            seed: 123,
            training_recall: RecallMode::TeacherForced,
            evaluation_recall: RecallMode::Autoregressive,
            max_rejections: 10_000,
        }
    }

    /// Number of distinct sequences, saturating at `u128::MAX`
    pub fn sequence_space(&self) -> u128 {
        sequence_space(self.sequence_length, self.alphabet_size)
    }
}

impl ConfigSection for HarnessConfig {
    fn validate(&self) -> Result<(), CopybenchError> {
        if self.alphabet_size < 2 {
            return Err(CopybenchError::Configuration(format!(
                "Alphabet size must be at least 2, got {}",
                self.alphabet_size
            )));
        }
        if self.sequence_length < 1 {
            return Err(CopybenchError::Configuration(
                "Sequence length must be at least 1".to_string()
            ));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(CopybenchError::Configuration(format!(
                "Decay must be strictly between 0 and 1, got {}",
                self.decay
            )));
        }
        if self.max_rejections == 0 {
            return Err(CopybenchError::Configuration(
                "Rejection cap must be at least 1".to_string()
            ));
        }
        if self.evaluation_recall == RecallMode::TeacherForced {
            return Err(CopybenchError::Configuration(
                "Held-out evaluation must use autoregressive or free-running recall".to_string()
            ));
        }
        Ok(())
    }
}
