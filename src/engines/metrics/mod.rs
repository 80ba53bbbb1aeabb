pub mod accuracy;
pub mod error_tracker;

pub use accuracy::AccuracyMetrics;
pub use error_tracker::ErrorTracker;
