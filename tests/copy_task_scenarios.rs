use copybench::config::HarnessConfig;
use copybench::engines::evaluation::{
    ColumnCodec, CopyTaskHarness, OneHotCodec, SymbolCodec, TrialDriver,
};
use copybench::predictors::{ConstantPredictor, DelayLinePredictor, TransitionPredictor};
use copybench::reporting::SilentObserver;
use copybench::{RecallMode, Sequence};

fn scenario_config(training_recall: RecallMode) -> HarnessConfig {
    HarnessConfig {
        alphabet_size: 4,
        sequence_length: 8,
        held_out_size: 10,
        num_trials: 200,
        decay: 0.99,
        seed: 7,
        training_recall,
        evaluation_recall: RecallMode::Autoregressive,
        max_rejections: 10_000,
    }
}

#[test]
fn test_identity_memorizer_copies_every_sequence_teacher_forced() {
    let codec = OneHotCodec::new(4);
    let predictor = DelayLinePredictor::new(8, vec![0.0; 4]).unwrap();
    let mut harness =
        CopyTaskHarness::new(scenario_config(RecallMode::TeacherForced), codec, predictor).unwrap();

    let outcome = harness.run_training(&mut SilentObserver).unwrap();

    assert!(outcome.results.iter().all(|r| r.all_correct));
    assert!(outcome.results.iter().all(|r| r.predicted == r.source));

    // Every trial passed, so the error decays geometrically from 1.0
    let expected = 0.99f64.powi(200);
    assert!((harness.running_error() - expected).abs() < 1e-9);
}

#[test]
fn test_identity_memorizer_copies_every_sequence_autoregressive() {
    let codec = OneHotCodec::new(4);
    let predictor = DelayLinePredictor::new(8, vec![0.0; 4]).unwrap();
    let mut harness =
        CopyTaskHarness::new(scenario_config(RecallMode::Autoregressive), codec, predictor).unwrap();

    let training = harness.run_training(&mut SilentObserver).unwrap();
    let held_out = harness.evaluate_held_out(&mut SilentObserver).unwrap();

    assert!(training.results.iter().all(|r| r.all_correct));
    assert_eq!(held_out.len(), 10);
    assert!(held_out.iter().all(|r| r.all_correct));
}

#[test]
fn test_identity_memorizer_free_running_with_column_codec() {
    let codec = ColumnCodec::new(4);
    let blank = codec.encode(0).unwrap();
    let predictor = DelayLinePredictor::new(8, blank).unwrap();
    let mut config = scenario_config(RecallMode::FreeRunning);
    config.evaluation_recall = RecallMode::FreeRunning;
    let mut harness = CopyTaskHarness::new(config, codec, predictor).unwrap();

    let report = harness.run(&mut SilentObserver).unwrap();

    assert_eq!(report.training_metrics["sequence_accuracy"], 1.0);
    assert_eq!(report.held_out_metrics["sequence_accuracy"], 1.0);
}

#[test]
fn test_constant_zero_predictor_scores_only_zero_positions() {
    let codec = OneHotCodec::new(4);
    let mut predictor = ConstantPredictor::new(codec.encode(0).unwrap());
    let mut driver = TrialDriver::new();

    let sequence = Sequence::new(vec![0, 3, 0, 1, 2, 0, 0, 3]);
    for mode in [RecallMode::TeacherForced, RecallMode::Autoregressive, RecallMode::FreeRunning] {
        let result = driver.run(&codec, &mut predictor, &sequence, mode, true).unwrap();

        assert!(!result.all_correct);
        assert_eq!(
            result.per_symbol_correct,
            vec![true, false, true, false, false, true, true, false]
        );
    }
}

#[test]
fn test_constant_zero_predictor_passes_all_zero_sequence() {
    let codec = OneHotCodec::new(4);
    let mut predictor = ConstantPredictor::new(codec.encode(0).unwrap());

    let result = TrialDriver::new()
        .run(&codec, &mut predictor, &Sequence::new(vec![0; 8]), RecallMode::TeacherForced, true)
        .unwrap();

    assert!(result.all_correct);
}

#[test]
fn test_constant_predictor_never_lowers_error_on_random_sequences() {
    let mut config = scenario_config(RecallMode::TeacherForced);
    config.num_trials = 300;
    let codec = OneHotCodec::new(4);
    let predictor = ConstantPredictor::new(codec.encode(0).unwrap());
    let mut harness = CopyTaskHarness::new(config, codec, predictor).unwrap();

    let outcome = harness.run_training(&mut SilentObserver).unwrap();

    // Only the all-zero sequence passes, and it has probability 4^-8 per trial
    let passes = outcome.results.iter().filter(|r| r.all_correct).count();
    assert_eq!(harness.tracker().passed(), passes);
    assert!(harness.running_error() > 0.9);
}

#[test]
fn test_held_out_evaluation_does_not_learn() {
    let config = scenario_config(RecallMode::TeacherForced);
    let codec = OneHotCodec::new(4);
    let mut harness = CopyTaskHarness::new(config, codec, TransitionPredictor::new(4)).unwrap();

    harness.evaluate_held_out(&mut SilentObserver).unwrap();

    let predictor = harness.predictor();
    for from in 0..4 {
        for to in 0..4 {
            assert_eq!(predictor.count(from, to), 0.0);
        }
    }
    assert_eq!(harness.tracker().trials(), 0);
    assert_eq!(harness.running_error(), 1.0);
}

#[test]
fn test_training_updates_transition_counts() {
    let mut config = scenario_config(RecallMode::TeacherForced);
    config.num_trials = 20;
    let mut harness = CopyTaskHarness::new(config, OneHotCodec::new(4), TransitionPredictor::new(4)).unwrap();

    harness.run_training(&mut SilentObserver).unwrap();

    let predictor = harness.predictor();
    let total: f32 = (0..4)
        .flat_map(|from| (0..4).map(move |to| (from, to)))
        .map(|(from, to)| predictor.count(from, to))
        .sum();

    // 2L - 1 transitions per trial, all teacher-forced
    assert_eq!(total, (20 * 15) as f32);
}
