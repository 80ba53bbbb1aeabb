use super::record::RunPhase;
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::types::TrialResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Summary of one harness run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub predictor: String,
    pub config: HarnessConfig,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub training_trials: usize,
    pub cancelled: bool,
    pub final_running_error: f64,
    pub training_metrics: HashMap<String, f64>,
    pub held_out_metrics: HashMap<String, f64>,
    pub held_out_results: Vec<TrialResult>,
}

impl RunReport {
    pub fn metrics(&self, phase: RunPhase) -> &HashMap<String, f64> {
        match phase {
            RunPhase::Training => &self.training_metrics,
            RunPhase::HeldOut => &self.held_out_metrics,
        }
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
