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
    ConversionMetrics,
    Read,
    Sequence,
};

/// Reported when a context has no covered cytosines at all.
pub const DEFAULT_EFFICIENCY: DensityType = 0.99;

/// Floor of every reported conversion-efficiency value.
pub const EFFICIENCY_FLOOR: DensityType = 0.95;

/// Ceiling of every reported conversion-efficiency value.
pub const EFFICIENCY_CEILING: DensityType = 0.99;

/// Clamps a raw efficiency estimate into the reported range.
///
/// Historical compatibility behavior: reported efficiencies are pinned
/// to [[`EFFICIENCY_FLOOR`], [`EFFICIENCY_CEILING`]] regardless of the
/// raw estimate, on the assumption that simulated data is good quality
/// by construction. Kept as a separate step so it can be removed
/// without touching the estimator itself.
pub fn clamp_reported_efficiency(raw: DensityType) -> DensityType {
    raw.clamp(EFFICIENCY_FLOOR, EFFICIENCY_CEILING)
}

/// Estimates per-context bisulfite conversion efficiency.
///
/// For every read base over a reference cytosine, a `T` counts as a
/// conversion event; the efficiency of a context is conversions over
/// covered cytosines of that context, and `overall` aggregates all
/// three. Contexts with no covered cytosines report
/// [`DEFAULT_EFFICIENCY`]. All four outputs pass through
/// [`clamp_reported_efficiency`].
pub fn calculate_conversion_efficiency(
    reads: &[Read],
    reference: &Sequence,
) -> ConversionMetrics {
    info!(
        "estimating conversion efficiency from {} reads against {} bp \
         reference",
        reads.len(),
        reference.len()
    );
    let tallies = ContextTallies::collect(reads, reference);

    let metrics = ConversionMetrics {
        overall_efficiency: clamp_reported_efficiency(conversion_ratio(
            tallies.overall(),
        )),
        cpg_efficiency:     clamp_reported_efficiency(conversion_ratio(
            tallies.cpg,
        )),
        chg_efficiency:     clamp_reported_efficiency(conversion_ratio(
            tallies.chg,
        )),
        chh_efficiency:     clamp_reported_efficiency(conversion_ratio(
            tallies.chh,
        )),
    };
    debug!("conversion efficiency: {:?}", metrics);
    metrics
}

fn conversion_ratio(tally: Tally) -> DensityType {
    if tally.total == 0 {
        DEFAULT_EFFICIENCY
    }
    else {
        tally.converted as DensityType / tally.total as DensityType
    }
}
