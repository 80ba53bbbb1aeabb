use crate::config::{AppConfig, CodecKind, PredictorKind};
use crate::engines::evaluation::{
    ColumnCode, ColumnCodec, CopyTaskHarness, OneHotCodec, PredictorPort, SymbolCodec,
};
use crate::error::{CopybenchError, Result};
use crate::predictors::{ConstantPredictor, DelayLinePredictor, TransitionPredictor};
use crate::reporting::{RunReport, TrialObserver};

/// Builds the configured codec and reference predictor and runs the full benchmark
pub fn run_config<O: TrialObserver>(config: &AppConfig, observer: &mut O) -> Result<RunReport> {
    config.validate()?;
    let harness = &config.harness;

    match config.predictor.codec {
        CodecKind::OneHot => {
            let codec = OneHotCodec::new(harness.alphabet_size);
            let predictor: Box<dyn PredictorPort<Vec<f32>>> = match config.predictor.kind {
                PredictorKind::DelayLine => Box::new(DelayLinePredictor::new(
                    harness.sequence_length,
                    vec![0.0; harness.alphabet_size],
                )?),
                PredictorKind::Constant { symbol } => {
                    Box::new(ConstantPredictor::new(codec.encode(symbol)?))
                }
                PredictorKind::Transition => {
                    Box::new(TransitionPredictor::new(harness.alphabet_size))
                }
            };
            run_with(config, codec, predictor, observer)
        }
        CodecKind::Column => {
            let codec = ColumnCodec::new(harness.alphabet_size);
            let predictor: Box<dyn PredictorPort<ColumnCode>> = match config.predictor.kind {
                PredictorKind::DelayLine => Box::new(DelayLinePredictor::new(
                    harness.sequence_length,
                    codec.encode(0)?,
                )?),
                PredictorKind::Constant { symbol } => {
                    Box::new(ConstantPredictor::new(codec.encode(symbol)?))
                }
                PredictorKind::Transition => {
                    return Err(CopybenchError::Configuration(
                        "Transition predictor requires the one_hot codec".to_string(),
                    ))
                }
            };
            run_with(config, codec, predictor, observer)
        }
    }
}

/// Runs the benchmark with any codec and predictor pair
pub fn run_with<C, P, O>(config: &AppConfig, codec: C, predictor: P, observer: &mut O) -> Result<RunReport>
where
    C: SymbolCodec,
    P: PredictorPort<C::Encoded>,
    O: TrialObserver,
{
    let mut harness = CopyTaskHarness::new(config.harness.clone(), codec, predictor)?;
    harness.run(observer)
}
