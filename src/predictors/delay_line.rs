use crate::engines::evaluation::PredictorPort;
use crate::error::{CopybenchError, Result};
use std::collections::VecDeque;

/// Identity memorizer: after each tick it outputs the input seen `delay - 1` ticks
/// earlier, so with `delay == L` it replays a sequence of length `L` exactly.
///
/// Emits `blank` until `delay` inputs have been seen. Without an observation it
/// feeds its own last output back in.
#[derive(Debug, Clone)]
pub struct DelayLinePredictor<E> {
    delay: usize,
    blank: E,
    buffer: VecDeque<E>,
    last_output: E,
}

impl<E: Clone> DelayLinePredictor<E> {
    pub fn new(delay: usize, blank: E) -> Result<Self> {
        if delay == 0 {
            return Err(CopybenchError::Configuration(
                "Delay line needs a delay of at least 1".to_string(),
            ));
        }

        Ok(Self {
            delay,
            buffer: VecDeque::with_capacity(delay),
            last_output: blank.clone(),
            blank,
        })
    }

    pub fn delay(&self) -> usize {
        self.delay
    }
}

impl<E: Clone> PredictorPort<E> for DelayLinePredictor<E> {
    fn name(&self) -> &str {
        "delay_line"
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.last_output = self.blank.clone();
    }

    fn step(&mut self, observed: Option<&E>, _learn: bool) -> Result<E> {
        let input = observed.cloned().unwrap_or_else(|| self.last_output.clone());
        self.buffer.push_back(input);
        if self.buffer.len() > self.delay {
            self.buffer.pop_front();
        }

        self.last_output = if self.buffer.len() == self.delay {
            self.buffer.front().cloned().unwrap_or_else(|| self.blank.clone())
        } else {
            self.blank.clone()
        };
        Ok(self.last_output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outputs_blank_until_primed() {
        let mut predictor = DelayLinePredictor::new(3, 99usize).unwrap();

        assert_eq!(predictor.step(Some(&1), true).unwrap(), 99);
        assert_eq!(predictor.step(Some(&2), true).unwrap(), 99);
        assert_eq!(predictor.step(Some(&3), true).unwrap(), 1);
        assert_eq!(predictor.step(Some(&4), true).unwrap(), 2);
    }

    #[test]
    fn test_free_running_replays_buffer() {
        let mut predictor = DelayLinePredictor::new(3, 0usize).unwrap();
        for s in [5, 6, 7] {
            predictor.step(Some(&s), false).unwrap();
        }

        let replay: Vec<usize> = (0..3).map(|_| predictor.step(None, false).unwrap()).collect();
        assert_eq!(replay, vec![6, 7, 5]);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut predictor = DelayLinePredictor::new(1, 0usize).unwrap();
        assert_eq!(predictor.step(Some(&4), false).unwrap(), 4);

        predictor.reset();
        assert_eq!(predictor.step(None, false).unwrap(), 0);
    }

    #[test]
    fn test_zero_delay_rejected() {
        assert!(DelayLinePredictor::new(0, 0usize).is_err());
    }
}
