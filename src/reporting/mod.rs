pub mod progress;
pub mod record;
pub mod report;

pub use progress::{
    ChannelReporter, ConsoleReporter, LogReporter, ReportMessage, SilentObserver, TrialObserver,
};
pub use record::{RunPhase, TrialRecord};
pub use report::RunReport;
