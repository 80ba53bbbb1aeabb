pub mod config;
pub mod engines;
pub mod error;
pub mod predictors;
pub mod reporting;
pub mod runner;
pub mod types;

pub use error::{CopybenchError, Result};
pub use types::{RecallMode, Sequence, Symbol, TrialPhase, TrialResult};
