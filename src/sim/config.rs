use serde::{
    Deserialize,
    Serialize,
};

use super::generate::IslandProfile;
use crate::data_structs::typedef::DensityType;
use crate::utils::{
    ensure_positive,
    ensure_rate,
};
use crate::with_field_fn;

/// Parameters of one simulation run.
///
/// Validation happens once, at [`SimulationConfig::validate`], before
/// any simulation work starts; the stage functions assume a validated
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Reference length in base pairs.
    pub sequence_length:       usize,
    /// Methylation rate for CpG-context cytosines.
    pub cpg_rate:              DensityType,
    /// Methylation rate for CHG-context cytosines.
    pub chg_rate:              DensityType,
    /// Methylation rate for CHH-context cytosines.
    pub chh_rate:              DensityType,
    /// Probability that an unmethylated cytosine converts to thymine.
    pub conversion_efficiency: DensityType,
    /// Target read length in base pairs.
    pub read_length:           usize,
    /// Target average coverage depth.
    pub coverage:              usize,
    /// Per-base substitution error rate.
    pub error_rate:            DensityType,
    /// Optional GC-island structure for the reference; `None` yields a
    /// uniform composition.
    pub island_profile:        Option<IslandProfile>,
}

impl SimulationConfig {
    with_field_fn!(sequence_length, usize);

    with_field_fn!(cpg_rate, DensityType);

    with_field_fn!(chg_rate, DensityType);

    with_field_fn!(chh_rate, DensityType);

    with_field_fn!(conversion_efficiency, DensityType);

    with_field_fn!(read_length, usize);

    with_field_fn!(coverage, usize);

    with_field_fn!(error_rate, DensityType);

    with_field_fn!(island_profile, Option<IslandProfile>);

    /// Fail-fast check of every parameter.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_positive("sequence_length", self.sequence_length)?;
        ensure_positive("read_length", self.read_length)?;
        ensure_positive("coverage", self.coverage)?;
        ensure_rate("cpg_rate", self.cpg_rate)?;
        ensure_rate("chg_rate", self.chg_rate)?;
        ensure_rate("chh_rate", self.chh_rate)?;
        ensure_rate("conversion_efficiency", self.conversion_efficiency)?;
        ensure_rate("error_rate", self.error_rate)?;
        if let Some(profile) = &self.island_profile {
            profile.validate()?;
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sequence_length:       10_000,
            cpg_rate:              0.70,
            chg_rate:              0.20,
            chh_rate:              0.05,
            conversion_efficiency: 0.99,
            read_length:           100,
            coverage:              10,
            error_rate:            0.001,
            island_profile:        None,
        }
    }
}
