//! # bsqc
//!
//! `bsqc` is a Rust library and command-line tool for simulating
//! bisulfite-sequencing experiments and measuring how accurately
//! cytosine-methylation signal can be recovered from the resulting
//! reads. It generates a synthetic reference, assigns methylation state
//! to every cytosine by its CG/CHG/CHH context, simulates stochastic
//! bisulfite conversion and sequencing error, and then estimates
//! per-context conversion efficiency and methylation levels against the
//! known ground truth.
//!
//! ## Key Features
//!
//! * **Typed sequence model**: validated [`Sequence`] / [`Read`] /
//!   [`MethylationPattern`] types, with context classification
//!   (including the explicit end-of-sequence policy) isolated in
//!   [`Context::classify`].
//! * **Reproducible simulation**: every stochastic stage takes its own
//!   `rand::Rng`, so seeded runs are bit-identical and concurrent
//!   simulations never share generator state.
//! * **Per-context estimation**: conversion efficiency and methylation
//!   levels re-derived from reads registered to the original reference,
//!   with documented fallbacks for uncovered contexts.
//! * **Quality control**: lambda-control style global conversion ratio,
//!   CHH background check and threshold validation.
//! * **Typed metric records**: [`ConversionMetrics`],
//!   [`MethylationLevels`] and [`ConversionValidation`] populate every
//!   context by construction and serialize under stable reporting keys.
//!
//! ## Structure
//!
//! * [`data_structs`]: sequences, methylation patterns, reads, the
//!   context enumeration and the metric records.
//! * [`sim`]: the simulation pipeline (reference generation,
//!   methylation assignment, bisulfite conversion, read sampling) and
//!   its configuration.
//! * [`tools`]: estimators and quality-control checks.
//! * [`utils`]: shared macros and boundary checks.
//!
//! ## Usage
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use bsqc::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = SimulationConfig::default()
//!         .with_sequence_length(5_000)
//!         .with_coverage(20);
//!
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let output = run_simulation(&mut rng, &config)?;
//!
//!     let metrics =
//!         calculate_conversion_efficiency(&output.reads, &output.reference);
//!     let validation = validate_conversion_efficiency(
//!         &output.reads,
//!         &output.reference,
//!         0.95,
//!     )?;
//!
//!     println!(
//!         "overall efficiency {:.3}, pass: {}",
//!         metrics.overall_efficiency, validation.overall_pass
//!     );
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod prelude;
pub mod sim;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
