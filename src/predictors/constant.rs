use crate::engines::evaluation::PredictorPort;
use crate::error::Result;

/// Predicts the same encoded symbol on every tick
#[derive(Debug, Clone)]
pub struct ConstantPredictor<E> {
    output: E,
}

impl<E: Clone> ConstantPredictor<E> {
    pub fn new(output: E) -> Self {
        Self { output }
    }
}

impl<E: Clone> PredictorPort<E> for ConstantPredictor<E> {
    fn name(&self) -> &str {
        "constant"
    }

    fn reset(&mut self) {}

    fn step(&mut self, _observed: Option<&E>, _learn: bool) -> Result<E> {
        Ok(self.output.clone())
    }
}
