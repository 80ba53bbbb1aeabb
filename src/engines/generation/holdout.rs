use super::sequence::SequenceGenerator;
use crate::error::{CopybenchError, Result};
use crate::types::Sequence;
use rand::Rng;
use std::collections::HashSet;

/// Sequences reserved for generalization testing. Built once, read-only afterwards.
///
/// Duplicates among the reserved sequences are kept in `sequences` (they are evaluated
/// as often as they were drawn) but collapse in the membership index.
#[derive(Debug, Clone, Default)]
pub struct HeldOutSet {
    sequences: Vec<Sequence>,
    index: HashSet<Sequence>,
}

impl HeldOutSet {
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.index.contains(sequence)
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Number of distinct reserved sequences
    pub fn distinct_len(&self) -> usize {
        self.index.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }
}

/// Splits the sequence space into a held-out set and a disjoint training stream
/// by rejection sampling.
#[derive(Debug, Clone)]
pub struct HoldoutPartition {
    generator: SequenceGenerator,
    max_rejections: usize,
}

impl HoldoutPartition {
    pub fn new(generator: SequenceGenerator, max_rejections: usize) -> Result<Self> {
        if max_rejections == 0 {
            return Err(CopybenchError::Configuration(
                "Rejection cap must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            generator,
            max_rejections,
        })
    }

    pub fn generator(&self) -> &SequenceGenerator {
        &self.generator
    }

    /// Draws `count` sequences to hold out. Must run before any training sequence is drawn.
    ///
    /// Fails as soon as the distinct draws cover the whole sequence space.
    pub fn build_held_out<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<HeldOutSet> {
        let space = self.generator.sequence_space();
        let mut held_out = HeldOutSet::default();

        for _ in 0..count {
            let sequence = self.generator.generate(rng);
            held_out.index.insert(sequence.clone());
            held_out.sequences.push(sequence);

            if held_out.distinct_len() as u128 >= space {
                return Err(CopybenchError::Configuration(format!(
                    "Held-out set covers all {} sequences of length {} over {} symbols",
                    space,
                    self.generator.length(),
                    self.generator.alphabet_size()
                )));
            }
        }

        log::info!(
            "Held out {} sequences ({} distinct) of length {}",
            held_out.len(),
            held_out.distinct_len(),
            self.generator.length()
        );

        Ok(held_out)
    }

    /// Draws candidates until one is not in `held_out`.
    ///
    /// Fails with a configuration error when `max_rejections + 1` consecutive draws collide.
    pub fn next_training_sequence<R: Rng + ?Sized>(
        &self,
        held_out: &HeldOutSet,
        rng: &mut R,
    ) -> Result<Sequence> {
        if held_out.distinct_len() as u128 >= self.generator.sequence_space() {
            return Err(CopybenchError::Configuration(
                "Held-out set leaves no sequence for training".to_string(),
            ));
        }

        for rejected in 0..=self.max_rejections {
            let candidate = self.generator.generate(rng);
            if !held_out.contains(&candidate) {
                if rejected > 0 {
                    log::debug!("Accepted training sequence after {} rejections", rejected);
                }
                return Ok(candidate);
            }
            log::trace!("Rejected held-out sequence {}", candidate);
        }

        Err(CopybenchError::Configuration(format!(
            "Drew {} consecutive held-out sequences; the sequence space is too small for the held-out set",
            self.max_rejections + 1
        )))
    }
}
