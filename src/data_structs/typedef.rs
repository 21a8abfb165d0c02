//! Type aliases shared across the crate.

/// Position within a sequence.
pub type PosType = usize;

/// Tally of observed events.
pub type CountType = u64;

/// Fractions, rates and probabilities.
pub type DensityType = f64;

/// The four nucleotide symbols every [`crate::data_structs::Sequence`]
/// is drawn from.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'T', b'C', b'G'];
