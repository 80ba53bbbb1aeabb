pub mod traits;
pub mod harness;
pub mod predictor;
pub mod reporting;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use harness::HarnessConfig;
pub use predictor::{PredictorConfig, CodecKind, PredictorKind};
pub use reporting::ReportingConfig;
pub use traits::ConfigSection;
