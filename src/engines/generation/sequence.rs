use crate::error::{CopybenchError, Result};
use crate::types::{Sequence, Symbol};
use rand::Rng;

/// Draws fixed-length sequences of uniform, independent symbols from `[0, alphabet_size)`.
///
/// The generator holds no randomness of its own; callers pass a seedable RNG so that
/// a whole run is reproducible from one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceGenerator {
    length: usize,
    alphabet_size: usize,
}

impl SequenceGenerator {
    pub fn new(length: usize, alphabet_size: usize) -> Result<Self> {
        if alphabet_size < 2 {
            return Err(CopybenchError::Configuration(format!(
                "Alphabet size must be at least 2, got {}",
                alphabet_size
            )));
        }
        if length < 1 {
            return Err(CopybenchError::Configuration(
                "Sequence length must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            length,
            alphabet_size,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Sequence {
        random_sequence(self.length, self.alphabet_size, rng)
    }

    pub fn sequence_space(&self) -> u128 {
        sequence_space(self.length, self.alphabet_size)
    }
}

/// Number of distinct sequences of `length` over `alphabet_size` symbols, saturating at `u128::MAX`
pub fn sequence_space(length: usize, alphabet_size: usize) -> u128 {
    let base = alphabet_size as u128;
    (0..length).fold(1u128, |acc, _| acc.saturating_mul(base))
}

/// Generate random sequence
pub fn random_sequence<R: Rng + ?Sized>(length: usize, alphabet_size: usize, rng: &mut R) -> Sequence {
    (0..length)
        .map(|_| rng.gen_range(0..alphabet_size))
        .collect::<Vec<Symbol>>()
        .into()
}
