//! Core data structures for representing sequences, methylation state
//! and quality metrics.
//!
//! Key components:
//!
//! - [`Sequence`]: a validated, immutable nucleotide sequence over
//!   {A, T, C, G}, with context lookups.
//! - [`Context`]: the CG/CHG/CHH methylation context enumeration and
//!   its classification rule, including the end-of-sequence policy.
//! - [`MethylationPattern`]: per-position methylation flags produced by
//!   the simulator.
//! - [`Read`]: a sampled read registered to the reference by offset.
//! - [`ConversionMetrics`], [`MethylationLevels`],
//!   [`ConversionValidation`]: flat result records with one named field
//!   per context, so all contexts are populated by construction.
//! - [`typedef`]: aliases for positions, counts and densities.

mod enums;
mod metrics;
mod sequence;
pub mod typedef;

pub use enums::Context;
pub use metrics::{
    ConversionMetrics,
    ConversionValidation,
    MethylationLevels,
};
pub use sequence::{
    ConvertedSequence,
    MethylationPattern,
    Read,
    Sequence,
};
