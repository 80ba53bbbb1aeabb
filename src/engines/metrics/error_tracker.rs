use crate::error::{CopybenchError, Result};

/// Exponentially weighted moving average of the trial failure rate.
///
/// Starts at 1.0 (every trial assumed failed) and is never reset for the
/// lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTracker {
    decay: f64,
    running_error: f64,
    trials: usize,
    passed: usize,
}

impl ErrorTracker {
    pub const INITIAL_ERROR: f64 = 1.0;

    pub fn new(decay: f64) -> Result<Self> {
        if !(decay > 0.0 && decay < 1.0) {
            return Err(CopybenchError::Configuration(format!(
                "Decay must be strictly between 0 and 1, got {}",
                decay
            )));
        }

        Ok(Self {
            decay,
            running_error: Self::INITIAL_ERROR,
            trials: 0,
            passed: 0,
        })
    }

    /// Folds one trial outcome in and returns the new running error
    pub fn update(&mut self, trial_passed: bool) -> f64 {
        let failure = if trial_passed { 0.0 } else { 1.0 };
        let next = self.decay * self.running_error + (1.0 - self.decay) * failure;

        // Rounding may land one ulp outside the unit interval
        self.running_error = next.clamp(0.0, 1.0);
        self.trials += 1;
        if trial_passed {
            self.passed += 1;
        }

        self.running_error
    }

    pub fn running_error(&self) -> f64 {
        self.running_error
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn passed(&self) -> usize {
        self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_starts_pessimistic() {
        let tracker = ErrorTracker::new(0.99).unwrap();
        assert_eq!(tracker.running_error(), 1.0);
        assert_eq!(tracker.trials(), 0);
    }

    #[test]
    fn test_single_update_values() {
        let mut tracker = ErrorTracker::new(0.9).unwrap();

        let after_pass = tracker.update(true);
        assert!((after_pass - 0.9).abs() < 1e-12);

        let after_fail = tracker.update(false);
        assert!((after_fail - (0.9 * 0.9 + 0.1)).abs() < 1e-12);
        assert_eq!(tracker.passed(), 1);
        assert_eq!(tracker.trials(), 2);
    }

    #[test]
    fn test_failures_keep_error_at_one() {
        let mut tracker = ErrorTracker::new(0.99).unwrap();
        for _ in 0..1000 {
            tracker.update(false);
        }
        assert_eq!(tracker.running_error(), 1.0);
    }

    #[test]
    fn test_passes_drive_error_towards_zero() {
        let mut tracker = ErrorTracker::new(0.99).unwrap();
        for _ in 0..2000 {
            tracker.update(true);
        }
        assert!(tracker.running_error() < 1e-8);
    }

    #[test]
    fn test_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(17);
        for decay in [1e-9, 0.01, 0.5, 0.9, 0.99, 0.999_999] {
            let mut tracker = ErrorTracker::new(decay).unwrap();
            for _ in 0..5000 {
                let error = tracker.update(rng.gen::<bool>());
                assert!((0.0..=1.0).contains(&error), "decay {} gave {}", decay, error);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_decay() {
        assert!(ErrorTracker::new(0.0).is_err());
        assert!(ErrorTracker::new(1.0).is_err());
        assert!(ErrorTracker::new(f64::NAN).is_err());
    }
}
