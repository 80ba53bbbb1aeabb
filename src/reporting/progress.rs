use super::record::{RunPhase, TrialRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Receives the harness output. Cancellation is checked between trials only.
pub trait TrialObserver {
    fn on_phase_start(&mut self, _phase: RunPhase, _total: usize) {}

    fn on_trial(&mut self, record: &TrialRecord);

    fn on_phase_complete(&mut self, _phase: RunPhase, _metrics: &HashMap<String, f64>) {}

    fn should_continue(&self) -> bool {
        true
    }
}

/// Fans out to two observers; continues only while both agree
impl<A: TrialObserver, B: TrialObserver> TrialObserver for (A, B) {
    fn on_phase_start(&mut self, phase: RunPhase, total: usize) {
        self.0.on_phase_start(phase, total);
        self.1.on_phase_start(phase, total);
    }

    fn on_trial(&mut self, record: &TrialRecord) {
        self.0.on_trial(record);
        self.1.on_trial(record);
    }

    fn on_phase_complete(&mut self, phase: RunPhase, metrics: &HashMap<String, f64>) {
        self.0.on_phase_complete(phase, metrics);
        self.1.on_phase_complete(phase, metrics);
    }

    fn should_continue(&self) -> bool {
        self.0.should_continue() && self.1.should_continue()
    }
}

pub struct SilentObserver;

impl TrialObserver for SilentObserver {
    fn on_trial(&mut self, _record: &TrialRecord) {}
}

/// Prints one `Pass: ...` line per trial to stdout
pub struct ConsoleReporter {
    enabled: bool,
}

impl ConsoleReporter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl TrialObserver for ConsoleReporter {
    fn on_phase_start(&mut self, phase: RunPhase, total: usize) {
        if self.enabled && phase == RunPhase::HeldOut {
            println!("=================== Hold Out ({}) ===================", total);
        }
    }

    fn on_trial(&mut self, record: &TrialRecord) {
        if self.enabled {
            println!("{}", record);
        }
    }
}

/// Logs progress every `log_every` trials and a summary per phase
pub struct LogReporter {
    log_every: usize,
    total: usize,
}

impl LogReporter {
    pub fn new(log_every: usize) -> Self {
        Self {
            log_every: log_every.max(1),
            total: 0,
        }
    }
}

impl TrialObserver for LogReporter {
    fn on_phase_start(&mut self, phase: RunPhase, total: usize) {
        self.total = total;
        log::info!("Starting {} phase: {} trials", phase, total);
    }

    fn on_trial(&mut self, record: &TrialRecord) {
        let done = record.trial_index + 1;
        if done % self.log_every == 0 || done == self.total {
            match record.running_error {
                Some(error) => log::info!(
                    "{} trial {}/{}: running error {:.4}",
                    record.phase, done, self.total, error
                ),
                None => log::info!("{} trial {}/{}", record.phase, done, self.total),
            }
        }
        log::trace!("{}", record);
    }

    fn on_phase_complete(&mut self, phase: RunPhase, metrics: &HashMap<String, f64>) {
        log::info!(
            "Finished {} phase: sequence accuracy {:.4}, symbol accuracy {:.4}",
            phase,
            metrics.get("sequence_accuracy").copied().unwrap_or(0.0),
            metrics.get("symbol_accuracy").copied().unwrap_or(0.0)
        );
    }
}

pub enum ReportMessage {
    PhaseStart { phase: RunPhase, total: usize },
    Trial(TrialRecord),
    PhaseComplete { phase: RunPhase, metrics: HashMap<String, f64> },
}

/// Forwards everything over a channel and stops the run once the cancel flag is raised
pub struct ChannelReporter {
    sender: Sender<ReportMessage>,
    cancel_flag: Arc<AtomicBool>,
}

impl ChannelReporter {
    pub fn new(sender: Sender<ReportMessage>) -> Self {
        Self {
            sender,
            cancel_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_flag)
    }
}

impl TrialObserver for ChannelReporter {
    fn on_phase_start(&mut self, phase: RunPhase, total: usize) {
        let _ = self.sender.send(ReportMessage::PhaseStart { phase, total });
    }

    fn on_trial(&mut self, record: &TrialRecord) {
        let _ = self.sender.send(ReportMessage::Trial(record.clone()));
    }

    fn on_phase_complete(&mut self, phase: RunPhase, metrics: &HashMap<String, f64>) {
        let _ = self.sender.send(ReportMessage::PhaseComplete {
            phase,
            metrics: metrics.clone(),
        });
    }

    fn should_continue(&self) -> bool {
        !self.cancel_flag.load(Ordering::SeqCst)
    }
}
