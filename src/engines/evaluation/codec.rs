use crate::error::{CopybenchError, Result};
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Bidirectional mapping between symbols and the representation a predictor consumes
pub trait SymbolCodec {
    type Encoded: Clone + Debug;

    fn alphabet_size(&self) -> usize;

    /// Fails with `Encoding` when `symbol` is outside the alphabet
    fn encode(&self, symbol: Symbol) -> Result<Self::Encoded>;

    /// Fails with `PredictorContract` when `encoded` is malformed
    fn decode(&self, encoded: &Self::Encoded) -> Result<Symbol>;
}

fn check_symbol(symbol: Symbol, alphabet_size: usize) -> Result<()> {
    if symbol >= alphabet_size {
        return Err(CopybenchError::Encoding {
            symbol,
            alphabet_size,
        });
    }
    Ok(())
}

/// One-hot vectors of length `K`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneHotCodec {
    alphabet_size: usize,
}

impl OneHotCodec {
    pub fn new(alphabet_size: usize) -> Self {
        Self { alphabet_size }
    }
}

impl SymbolCodec for OneHotCodec {
    type Encoded = Vec<f32>;

    fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    fn encode(&self, symbol: Symbol) -> Result<Vec<f32>> {
        check_symbol(symbol, self.alphabet_size)?;
        let mut one_hot = vec![0.0; self.alphabet_size];
        one_hot[symbol] = 1.0;
        Ok(one_hot)
    }

    /// Argmax, ties resolved to the lowest index
    fn decode(&self, encoded: &Vec<f32>) -> Result<Symbol> {
        if encoded.len() != self.alphabet_size {
            return Err(CopybenchError::PredictorContract(format!(
                "expected a vector of length {}, got {}",
                self.alphabet_size,
                encoded.len()
            )));
        }
        if let Some(i) = encoded.iter().position(|v| v.is_nan()) {
            return Err(CopybenchError::PredictorContract(format!(
                "component {} of the prediction is NaN",
                i
            )));
        }

        // Strict comparison keeps the earliest index on ties
        let (best, _) = encoded
            .iter()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |(best, best_value), (i, &value)| {
                if value > best_value {
                    (i, value)
                } else {
                    (best, best_value)
                }
            });
        Ok(best)
    }
}

/// A single active cell inside a square chunk, the input format of column-based
/// hierarchies. The chunk has `ceil(sqrt(K))^2` cells, of which the first `K` are symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnCode {
    pub cell: usize,
    pub num_cells: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCodec {
    alphabet_size: usize,
    chunk_size: usize,
}

impl ColumnCodec {
    pub fn new(alphabet_size: usize) -> Self {
        let mut chunk_size = 1;
        while chunk_size * chunk_size < alphabet_size {
            chunk_size += 1;
        }

        Self {
            alphabet_size,
            chunk_size,
        }
    }

    /// Side length of the square chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn num_cells(&self) -> usize {
        self.chunk_size * self.chunk_size
    }
}

impl SymbolCodec for ColumnCodec {
    type Encoded = ColumnCode;

    fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    fn encode(&self, symbol: Symbol) -> Result<ColumnCode> {
        check_symbol(symbol, self.alphabet_size)?;
        Ok(ColumnCode {
            cell: symbol,
            num_cells: self.num_cells(),
        })
    }

    fn decode(&self, encoded: &ColumnCode) -> Result<Symbol> {
        if encoded.num_cells != self.num_cells() {
            return Err(CopybenchError::PredictorContract(format!(
                "expected a column of {} cells, got {}",
                self.num_cells(),
                encoded.num_cells
            )));
        }
        if encoded.cell >= self.alphabet_size {
            return Err(CopybenchError::PredictorContract(format!(
                "predicted cell {} is outside alphabet of size {}",
                encoded.cell, self.alphabet_size
            )));
        }
        Ok(encoded.cell)
    }
}
