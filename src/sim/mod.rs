//! The bisulfite sequencing simulation pipeline.
//!
//! Stages run leaf to root, each a pure transformation of the previous
//! stage's output plus configuration:
//!
//! 1. [`generate::generate_reference`] (or the GC-island variant):
//!    synthetic reference.
//! 2. [`methylation::simulate_methylation_pattern`]: per-position
//!    methylation state by CG/CHG/CHH context.
//! 3. [`conversion::apply_conversion`]: stochastic bisulfite
//!    conversion of unmethylated cytosines.
//! 4. [`reads::simulate_reads`]: coverage-driven read sampling with
//!    per-base error injection.
//!
//! Every stochastic function takes its random source as an argument;
//! there is no process-wide seed. Seed the generator explicitly to get
//! reproducible runs, and give concurrent simulations their own
//! generators.
//!
//! [`run_simulation`] chains the stages under one validated
//! [`SimulationConfig`].

pub mod config;
pub mod conversion;
pub mod generate;
pub mod methylation;
pub mod reads;

use log::info;
use rand::Rng;

pub use self::config::SimulationConfig;
pub use self::generate::IslandProfile;
use crate::data_structs::{
    ConvertedSequence,
    MethylationPattern,
    Read,
    Sequence,
};

/// Everything one simulation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub reference: Sequence,
    pub pattern:   MethylationPattern,
    pub converted: ConvertedSequence,
    pub reads:     Vec<Read>,
}

/// Runs the full pipeline under `config`.
///
/// The config is validated before any simulation work; a rejected
/// config leaves the random source untouched.
pub fn run_simulation<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SimulationConfig,
) -> anyhow::Result<SimulationOutput> {
    config.validate()?;
    info!(
        "simulating {} bp at {}x coverage ({} bp reads)",
        config.sequence_length, config.coverage, config.read_length
    );

    let reference = match &config.island_profile {
        Some(profile) => generate::generate_reference_with_islands(
            rng,
            config.sequence_length,
            profile,
        )?,
        None => generate::generate_reference(rng, config.sequence_length)?,
    };
    let pattern = methylation::simulate_methylation_pattern(
        rng,
        &reference,
        config.cpg_rate,
        config.chg_rate,
        config.chh_rate,
    )?;
    let converted = conversion::apply_conversion(
        rng,
        &reference,
        &pattern,
        config.conversion_efficiency,
    )?;
    let reads = reads::simulate_reads(
        rng,
        &converted,
        config.coverage,
        config.read_length,
        config.error_rate,
    )?;

    info!("simulation produced {} reads", reads.len());
    Ok(SimulationOutput {
        reference,
        pattern,
        converted,
        reads,
    })
}
