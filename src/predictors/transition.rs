use crate::engines::evaluation::{OneHotCodec, PredictorPort, SymbolCodec};
use crate::error::Result;
use crate::types::Symbol;

/// First-order transition counts over one-hot codes.
///
/// Outputs the normalized count row of the current symbol. The counts are
/// learned parameters: they survive `reset` and only change when `learn` is set.
/// A first-order model cannot solve the copy task; it serves as a learning baseline.
#[derive(Debug, Clone)]
pub struct TransitionPredictor {
    codec: OneHotCodec,
    counts: Vec<Vec<f32>>,
    previous: Option<Symbol>,
    last_output: Vec<f32>,
}

impl TransitionPredictor {
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            codec: OneHotCodec::new(alphabet_size),
            counts: vec![vec![0.0; alphabet_size]; alphabet_size],
            previous: None,
            last_output: vec![0.0; alphabet_size],
        }
    }

    /// Number of observed `from -> to` transitions
    pub fn count(&self, from: Symbol, to: Symbol) -> f32 {
        self.counts
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0.0)
    }

    fn row_distribution(&self, symbol: Symbol) -> Vec<f32> {
        let row = &self.counts[symbol];
        let total: f32 = row.iter().sum();
        if total > 0.0 {
            row.iter().map(|c| c / total).collect()
        } else {
            vec![0.0; row.len()]
        }
    }
}

impl PredictorPort<Vec<f32>> for TransitionPredictor {
    fn name(&self) -> &str {
        "transition"
    }

    fn reset(&mut self) {
        self.previous = None;
        self.last_output = vec![0.0; self.codec.alphabet_size()];
    }

    fn step(&mut self, observed: Option<&Vec<f32>>, learn: bool) -> Result<Vec<f32>> {
        let current = match observed {
            Some(encoded) => self.codec.decode(encoded)?,
            None => self.codec.decode(&self.last_output)?,
        };

        if learn {
            if let Some(previous) = self.previous {
                self.counts[previous][current] += 1.0;
            }
        }

        self.previous = Some(current);
        self.last_output = self.row_distribution(current);
        Ok(self.last_output.clone())
    }
}
