use super::codec::SymbolCodec;
use super::port::PredictorPort;
use super::trial::TrialDriver;
use crate::config::{ConfigSection, HarnessConfig};
use crate::engines::generation::{HeldOutSet, HoldoutPartition, SequenceGenerator};
use crate::engines::metrics::{AccuracyMetrics, ErrorTracker};
use crate::error::{CopybenchError, Result};
use crate::reporting::{RunPhase, RunReport, TrialObserver, TrialRecord};
use crate::types::TrialResult;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of the training loop
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub results: Vec<TrialResult>,
    pub cancelled: bool,
}

/// Single-controller copy-task benchmark over one predictor.
///
/// The held-out set is drawn from the seeded RNG before anything else, so every
/// training sequence is checked against a complete set.
pub struct CopyTaskHarness<C, P>
where
    C: SymbolCodec,
    P: PredictorPort<C::Encoded>,
{
    config: HarnessConfig,
    codec: C,
    predictor: P,
    partition: HoldoutPartition,
    held_out: HeldOutSet,
    tracker: ErrorTracker,
    driver: TrialDriver,
    rng: StdRng,
    trials_run: usize,
}

impl<C, P> CopyTaskHarness<C, P>
where
    C: SymbolCodec,
    P: PredictorPort<C::Encoded>,
{
    pub fn new(config: HarnessConfig, codec: C, predictor: P) -> Result<Self> {
        config.validate()?;
        if codec.alphabet_size() != config.alphabet_size {
            return Err(CopybenchError::Configuration(format!(
                "Codec alphabet size {} does not match configured alphabet size {}",
                codec.alphabet_size(),
                config.alphabet_size
            )));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let generator = SequenceGenerator::new(config.sequence_length, config.alphabet_size)?;
        let partition = HoldoutPartition::new(generator, config.max_rejections)?;
        let held_out = partition.build_held_out(config.held_out_size, &mut rng)?;
        let tracker = ErrorTracker::new(config.decay)?;

        Ok(Self {
            config,
            codec,
            predictor,
            partition,
            held_out,
            tracker,
            driver: TrialDriver::new(),
            rng,
            trials_run: 0,
        })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn held_out(&self) -> &HeldOutSet {
        &self.held_out
    }

    pub fn running_error(&self) -> f64 {
        self.tracker.running_error()
    }

    pub fn tracker(&self) -> &ErrorTracker {
        &self.tracker
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn trials_run(&self) -> usize {
        self.trials_run
    }

    /// Runs one training trial on a fresh sequence outside the held-out set
    pub fn train_once(&mut self) -> Result<TrialResult> {
        let sequence = self.partition.next_training_sequence(&self.held_out, &mut self.rng)?;
        let result = self.driver.run(
            &self.codec,
            &mut self.predictor,
            &sequence,
            self.config.training_recall,
            true,
        )?;

        self.tracker.update(result.all_correct);
        self.trials_run += 1;
        Ok(result)
    }

    /// Runs up to `num_trials` training trials, stopping early between trials
    /// when the observer asks to.
    pub fn run_training<O: TrialObserver>(&mut self, observer: &mut O) -> Result<TrainingOutcome> {
        let total = self.config.num_trials;
        observer.on_phase_start(RunPhase::Training, total);

        let mut results = Vec::new();
        let mut cancelled = false;

        for trial in 0..total {
            if !observer.should_continue() {
                log::info!("Training cancelled after {} of {} trials", trial, total);
                cancelled = true;
                break;
            }

            let result = self.train_once()?;
            observer.on_trial(&TrialRecord::training(trial, &result, self.tracker.running_error()));
            results.push(result);
        }

        let metrics = AccuracyMetrics::calculate(&results);
        observer.on_phase_complete(RunPhase::Training, &metrics);
        log::info!(
            "Training done: {} trials, running error {:.4}",
            results.len(),
            self.tracker.running_error()
        );

        Ok(TrainingOutcome { results, cancelled })
    }

    /// Scores every held-out sequence with learning disabled. Leaves the running error alone.
    pub fn evaluate_held_out<O: TrialObserver>(&mut self, observer: &mut O) -> Result<Vec<TrialResult>> {
        let total = self.held_out.len();
        observer.on_phase_start(RunPhase::HeldOut, total);

        let mut results = Vec::with_capacity(total);
        for (index, sequence) in self.held_out.iter().enumerate() {
            let result = self.driver.run(
                &self.codec,
                &mut self.predictor,
                sequence,
                self.config.evaluation_recall,
                false,
            )?;
            observer.on_trial(&TrialRecord::held_out(index, &result));
            results.push(result);
        }

        let metrics = AccuracyMetrics::calculate(&results);
        observer.on_phase_complete(RunPhase::HeldOut, &metrics);

        Ok(results)
    }

    /// Training followed by held-out evaluation
    pub fn run<O: TrialObserver>(&mut self, observer: &mut O) -> Result<RunReport> {
        let started_at = Utc::now();
        log::info!(
            "Running copy task with {}: K={}, L={}, H={}, N={}",
            self.predictor.name(),
            self.config.alphabet_size,
            self.config.sequence_length,
            self.config.held_out_size,
            self.config.num_trials
        );

        let training = self.run_training(observer)?;
        let held_out_results = if training.cancelled {
            Vec::new()
        } else {
            self.evaluate_held_out(observer)?
        };

        Ok(RunReport {
            predictor: self.predictor.name().to_string(),
            config: self.config.clone(),
            started_at,
            finished_at: Utc::now(),
            training_trials: training.results.len(),
            cancelled: training.cancelled,
            final_running_error: self.tracker.running_error(),
            training_metrics: AccuracyMetrics::calculate(&training.results),
            held_out_metrics: AccuracyMetrics::calculate(&held_out_results),
            held_out_results,
        })
    }
}
