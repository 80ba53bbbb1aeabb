use crate::types::TrialResult;
use std::collections::HashMap;

pub struct AccuracyMetrics;

impl AccuracyMetrics {
    /// Sequence-level and symbol-level accuracy over a batch of trials,
    /// plus accuracy at each recall position.
    pub fn calculate(results: &[TrialResult]) -> HashMap<String, f64> {
        let mut metrics = HashMap::new();

        metrics.insert("num_trials".to_string(), results.len() as f64);

        if results.is_empty() {
            return metrics;
        }

        let num_passed = results.iter().filter(|r| r.all_correct).count();
        metrics.insert("num_passed".to_string(), num_passed as f64);
        metrics.insert(
            "sequence_accuracy".to_string(),
            num_passed as f64 / results.len() as f64,
        );

        let total_symbols: usize = results.iter().map(|r| r.per_symbol_correct.len()).sum();
        let correct_symbols: usize = results.iter().map(|r| r.num_correct()).sum();
        if total_symbols > 0 {
            metrics.insert(
                "symbol_accuracy".to_string(),
                correct_symbols as f64 / total_symbols as f64,
            );
        }

        let length = results
            .iter()
            .map(|r| r.per_symbol_correct.len())
            .max()
            .unwrap_or(0);
        for position in 0..length {
            let scored: Vec<bool> = results
                .iter()
                .filter_map(|r| r.per_symbol_correct.get(position).copied())
                .collect();
            let correct = scored.iter().filter(|&&c| c).count();
            metrics.insert(
                format!("position_{}_accuracy", position),
                correct as f64 / scored.len() as f64,
            );
        }

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sequence;

    #[test]
    fn test_empty_batch() {
        let metrics = AccuracyMetrics::calculate(&[]);
        assert_eq!(metrics.get("num_trials"), Some(&0.0));
        assert!(metrics.get("sequence_accuracy").is_none());
    }

    #[test]
    fn test_mixed_batch() {
        let results = vec![
            TrialResult::score(Sequence::new(vec![1, 2]), Sequence::new(vec![1, 2])),
            TrialResult::score(Sequence::new(vec![1, 2]), Sequence::new(vec![1, 0])),
            TrialResult::score(Sequence::new(vec![3, 3]), Sequence::new(vec![0, 0])),
            TrialResult::score(Sequence::new(vec![0, 3]), Sequence::new(vec![0, 0])),
        ];

        let metrics = AccuracyMetrics::calculate(&results);

        assert_eq!(metrics["num_passed"], 1.0);
        assert_eq!(metrics["sequence_accuracy"], 0.25);
        assert_eq!(metrics["symbol_accuracy"], 4.0 / 8.0);
        assert_eq!(metrics["position_0_accuracy"], 0.75);
        assert_eq!(metrics["position_1_accuracy"], 0.25);
    }
}
