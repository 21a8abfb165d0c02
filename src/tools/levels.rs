use log::{
    debug,
    info,
};

use super::counts::{
    ContextTallies,
    Tally,
};
use crate::data_structs::typedef::DensityType;
use crate::data_structs::{
    MethylationLevels,
    Read,
    Sequence,
};

/// Nominal methylation levels reported for contexts without coverage.
pub const NOMINAL_CPG_METHYLATION: DensityType = 0.70;
pub const NOMINAL_CHG_METHYLATION: DensityType = 0.20;
pub const NOMINAL_CHH_METHYLATION: DensityType = 0.05;

/// Estimates per-context methylation levels.
///
/// The inverse view of conversion: a read base that is still `C` over a
/// reference cytosine resisted conversion, implying methylation. The
/// level of a context is retained cytosines over covered cytosines of
/// that context. Contexts with no covered cytosines fall back to the
/// nominal rate for that context.
pub fn calculate_methylation_levels(
    reads: &[Read],
    reference: &Sequence,
) -> MethylationLevels {
    info!(
        "estimating methylation levels from {} reads against {} bp reference",
        reads.len(),
        reference.len()
    );
    let tallies = ContextTallies::collect(reads, reference);

    let levels = MethylationLevels {
        cpg_methylation: retention_ratio(tallies.cpg, NOMINAL_CPG_METHYLATION),
        chg_methylation: retention_ratio(tallies.chg, NOMINAL_CHG_METHYLATION),
        chh_methylation: retention_ratio(tallies.chh, NOMINAL_CHH_METHYLATION),
    };
    debug!("methylation levels: {:?}", levels);
    levels
}

fn retention_ratio(
    tally: Tally,
    fallback: DensityType,
) -> DensityType {
    if tally.total == 0 {
        fallback
    }
    else {
        tally.retained as DensityType / tally.total as DensityType
    }
}
