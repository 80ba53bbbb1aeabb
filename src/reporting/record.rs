use crate::types::{Sequence, TrialResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    Training,
    HeldOut,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Training => write!(f, "training"),
            RunPhase::HeldOut => write!(f, "held-out"),
        }
    }
}

/// Observable outcome of one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub phase: RunPhase,
    pub trial_index: usize,
    pub source: Sequence,
    pub predicted: Sequence,
    pub all_correct: bool,
    /// Only training trials move the running error
    pub running_error: Option<f64>,
}

impl TrialRecord {
    pub fn training(trial_index: usize, result: &TrialResult, running_error: f64) -> Self {
        Self {
            phase: RunPhase::Training,
            trial_index,
            source: result.source.clone(),
            predicted: result.predicted.clone(),
            all_correct: result.all_correct,
            running_error: Some(running_error),
        }
    }

    pub fn held_out(trial_index: usize, result: &TrialResult) -> Self {
        Self {
            phase: RunPhase::HeldOut,
            trial_index,
            source: result.source.clone(),
            predicted: result.predicted.clone(),
            all_correct: result.all_correct,
            running_error: None,
        }
    }
}

impl fmt::Display for TrialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Pass: {} {} {}",
            self.trial_index, self.all_correct, self.source, self.predicted
        )?;
        if let Some(error) = self.running_error {
            write!(f, " E: {:.4}", error)?;
        }
        Ok(())
    }
}
