pub mod holdout;
pub mod sequence;

pub use holdout::{HeldOutSet, HoldoutPartition};
pub use sequence::{random_sequence, sequence_space, SequenceGenerator};
