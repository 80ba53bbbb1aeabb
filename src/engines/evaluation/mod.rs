pub mod codec;
pub mod harness;
pub mod port;
pub mod trial;

pub use codec::{ColumnCode, ColumnCodec, OneHotCodec, SymbolCodec};
pub use harness::{CopyTaskHarness, TrainingOutcome};
pub use port::PredictorPort;
pub use trial::TrialDriver;
