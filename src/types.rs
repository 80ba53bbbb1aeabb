use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol index inside an alphabet of size `K`, always in `[0, K)`
pub type Symbol = usize;

/// Fixed-length list of symbols. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl fmt::Display for Sequence {
    /// Single-digit alphabets print as a compact string ("01230123"),
    /// larger ones space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.0.iter().all(|&s| s < 10);
        for (i, symbol) in self.0.iter().enumerate() {
            if !compact && i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// How the recall pass feeds the predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallMode {
    TeacherForced,  // Ground truth fed again, one-step-ahead accuracy
    Autoregressive, // Own decoded prediction fed back as input
    FreeRunning,    // No input at all, predictor runs on its own state
}

impl RecallMode {
    pub fn name(&self) -> &'static str {
        match self {
            RecallMode::TeacherForced => "teacher_forced",
            RecallMode::Autoregressive => "autoregressive",
            RecallMode::FreeRunning => "free_running",
        }
    }
}

/// States of the trial driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    Idle,
    TeacherForced,
    Recall,
    Scored,
}

/// Outcome of one trial over one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub source: Sequence,
    pub predicted: Sequence,
    pub all_correct: bool,
    pub per_symbol_correct: Vec<bool>,
}

impl TrialResult {
    /// Scores `predicted` against `source` position by position
    pub fn score(source: Sequence, predicted: Sequence) -> Self {
        let per_symbol_correct: Vec<bool> = source
            .symbols()
            .iter()
            .zip(predicted.symbols())
            .map(|(expected, actual)| expected == actual)
            .collect();
        let all_correct = per_symbol_correct.len() == source.len()
            && per_symbol_correct.iter().all(|&c| c);

        Self {
            source,
            predicted,
            all_correct,
            per_symbol_correct,
        }
    }

    pub fn num_correct(&self) -> usize {
        self.per_symbol_correct.iter().filter(|&&c| c).count()
    }
}
