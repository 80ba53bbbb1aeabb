use super::codec::SymbolCodec;
use super::port::PredictorPort;
use crate::error::{CopybenchError, Result};
use crate::types::{RecallMode, Sequence, TrialPhase, TrialResult};

/// Runs one trial over one sequence: a teacher-forced pass that shows the sequence,
/// then a recall pass scored against it. A trial spans `2L` predictor ticks.
///
/// The first recall prediction is whatever the predictor emitted on the last
/// teacher-forced tick; each later one comes from the previous recall tick.
#[derive(Debug)]
pub struct TrialDriver {
    phase: TrialPhase,
}

impl Default for TrialDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TrialDriver {
    pub fn new() -> Self {
        Self {
            phase: TrialPhase::Idle,
        }
    }

    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    /// `training` enables learning on teacher-forced ticks. Ticks that feed the
    /// predictor its own output never learn.
    pub fn run<C, P>(
        &mut self,
        codec: &C,
        predictor: &mut P,
        sequence: &Sequence,
        mode: RecallMode,
        training: bool,
    ) -> Result<TrialResult>
    where
        C: SymbolCodec,
        P: PredictorPort<C::Encoded> + ?Sized,
    {
        self.phase = TrialPhase::Idle;
        let result = self.run_phases(codec, predictor, sequence, mode, training);

        // A trial that failed part-way is never scored
        self.phase = if result.is_ok() {
            TrialPhase::Scored
        } else {
            TrialPhase::Idle
        };
        result
    }

    fn run_phases<C, P>(
        &mut self,
        codec: &C,
        predictor: &mut P,
        sequence: &Sequence,
        mode: RecallMode,
        training: bool,
    ) -> Result<TrialResult>
    where
        C: SymbolCodec,
        P: PredictorPort<C::Encoded> + ?Sized,
    {
        if sequence.is_empty() {
            return Err(CopybenchError::Configuration(
                "Cannot run a trial over an empty sequence".to_string(),
            ));
        }

        // Encode everything up front so a bad symbol fails before the predictor is touched
        let encoded: Vec<C::Encoded> = sequence
            .symbols()
            .iter()
            .map(|&s| codec.encode(s))
            .collect::<Result<_>>()?;

        predictor.reset();

        self.phase = TrialPhase::TeacherForced;
        let mut prediction = None;
        for input in &encoded {
            prediction = Some(predictor.step(Some(input), training)?);
        }
        let mut prediction = prediction.ok_or_else(|| {
            CopybenchError::PredictorContract("no prediction after teacher-forced pass".to_string())
        })?;

        self.phase = TrialPhase::Recall;
        let mut predicted = Vec::with_capacity(sequence.len());
        for truth in &encoded {
            let symbol = codec.decode(&prediction)?;
            predicted.push(symbol);

            prediction = match mode {
                RecallMode::TeacherForced => predictor.step(Some(truth), training)?,
                RecallMode::Autoregressive => {
                    let fed_back = codec.encode(symbol)?;
                    predictor.step(Some(&fed_back), false)?
                }
                RecallMode::FreeRunning => predictor.step(None, false)?,
            };
        }

        Ok(TrialResult::score(sequence.clone(), Sequence::new(predicted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::evaluation::codec::OneHotCodec;

    /// Records every call so the tick schedule can be asserted
    struct Recorder {
        calls: Vec<(Option<usize>, bool)>,
        resets: usize,
        codec: OneHotCodec,
    }

    impl PredictorPort<Vec<f32>> for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn reset(&mut self) {
            self.resets += 1;
        }

        fn step(&mut self, observed: Option<&Vec<f32>>, learn: bool) -> Result<Vec<f32>> {
            let symbol = observed.map(|v| self.codec.decode(v)).transpose()?;
            self.calls.push((symbol, learn));
            self.codec.encode(1)
        }
    }

    fn recorder() -> Recorder {
        Recorder {
            calls: Vec::new(),
            resets: 0,
            codec: OneHotCodec::new(4),
        }
    }

    #[test]
    fn test_teacher_forced_schedule() {
        let codec = OneHotCodec::new(4);
        let mut predictor = recorder();
        let mut driver = TrialDriver::new();
        let sequence = Sequence::new(vec![2, 0, 3]);

        let result = driver
            .run(&codec, &mut predictor, &sequence, RecallMode::TeacherForced, true)
            .unwrap();

        assert_eq!(predictor.resets, 1);
        assert_eq!(
            predictor.calls,
            vec![
                (Some(2), true),
                (Some(0), true),
                (Some(3), true),
                (Some(2), true),
                (Some(0), true),
                (Some(3), true),
            ]
        );
        assert_eq!(result.predicted, Sequence::new(vec![1, 1, 1]));
        assert_eq!(driver.phase(), TrialPhase::Scored);
    }

    #[test]
    fn test_autoregressive_feeds_back_predictions_without_learning() {
        let codec = OneHotCodec::new(4);
        let mut predictor = recorder();
        let sequence = Sequence::new(vec![2, 0]);

        TrialDriver::new()
            .run(&codec, &mut predictor, &sequence, RecallMode::Autoregressive, true)
            .unwrap();

        assert_eq!(
            predictor.calls,
            vec![(Some(2), true), (Some(0), true), (Some(1), false), (Some(1), false)]
        );
    }

    #[test]
    fn test_free_running_withholds_input() {
        let codec = OneHotCodec::new(4);
        let mut predictor = recorder();
        let sequence = Sequence::new(vec![3]);

        TrialDriver::new()
            .run(&codec, &mut predictor, &sequence, RecallMode::FreeRunning, false)
            .unwrap();

        assert_eq!(predictor.calls, vec![(Some(3), false), (None, false)]);
    }

    #[test]
    fn test_out_of_alphabet_symbol_fails_before_reset() {
        let codec = OneHotCodec::new(4);
        let mut predictor = recorder();
        let mut driver = TrialDriver::new();

        let result = driver.run(
            &codec,
            &mut predictor,
            &Sequence::new(vec![0, 9]),
            RecallMode::TeacherForced,
            true,
        );

        assert!(matches!(result, Err(CopybenchError::Encoding { symbol: 9, .. })));
        assert_eq!(predictor.resets, 0);
        assert_eq!(driver.phase(), TrialPhase::Idle);
    }

    #[test]
    fn test_malformed_prediction_is_not_scored() {
        struct Short;

        impl PredictorPort<Vec<f32>> for Short {
            fn name(&self) -> &str {
                "short"
            }

            fn reset(&mut self) {}

            fn step(&mut self, _observed: Option<&Vec<f32>>, _learn: bool) -> Result<Vec<f32>> {
                Ok(vec![1.0])
            }
        }

        let mut driver = TrialDriver::new();
        let result = driver.run(
            &OneHotCodec::new(4),
            &mut Short,
            &Sequence::new(vec![0, 1]),
            RecallMode::TeacherForced,
            false,
        );

        assert!(matches!(result, Err(CopybenchError::PredictorContract(_))));
        assert_eq!(driver.phase(), TrialPhase::Idle);
    }
}
