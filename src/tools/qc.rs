use itertools::Itertools;
use log::{
    debug,
    info,
};

use super::counts::ContextTallies;
use super::efficiency::calculate_conversion_efficiency;
use crate::data_structs::typedef::DensityType;
use crate::data_structs::{
    ConversionValidation,
    Read,
    Sequence,
};
use crate::utils::ensure_rate;

/// Default minimum acceptable conversion efficiency.
pub const DEFAULT_VALIDATION_THRESHOLD: DensityType = 0.95;

/// Global conversion estimate in the style of an unmethylated lambda
/// DNA control: the fraction of `T` among all `C`/`T` read bases,
/// independent of reference registration and context.
///
/// Returns 0.0 when the reads contain no `C` or `T` at all.
pub fn calculate_lambda_dna_conversion(reads: &[Read]) -> DensityType {
    let base_counts = reads
        .iter()
        .flat_map(|read| read.as_bytes().iter().copied())
        .counts();
    let converted = base_counts.get(&b'T').copied().unwrap_or(0);
    let total = converted + base_counts.get(&b'C').copied().unwrap_or(0);

    let ratio = if total == 0 {
        0.0
    }
    else {
        converted as DensityType / total as DensityType
    };
    debug!(
        "lambda control conversion: {:.4} ({} of {} C/T bases)",
        ratio, converted, total
    );
    ratio
}

/// Background methylation sanity check: the retention fraction at CHH
/// cytosines, which should stay low in well-converted libraries.
///
/// Returns 0.0 when no CHH cytosines are covered.
pub fn calculate_chh_background(
    reads: &[Read],
    reference: &Sequence,
) -> DensityType {
    let chh = ContextTallies::collect(reads, reference).chh;
    if chh.total == 0 {
        0.0
    }
    else {
        chh.retained as DensityType / chh.total as DensityType
    }
}

/// Validates conversion efficiency against a minimum threshold.
///
/// Runs the efficiency estimator and marks every context as passing
/// when its (clamped) estimate is at least `threshold`.
pub fn validate_conversion_efficiency(
    reads: &[Read],
    reference: &Sequence,
    threshold: DensityType,
) -> anyhow::Result<ConversionValidation> {
    ensure_rate("threshold", threshold)?;
    let metrics = calculate_conversion_efficiency(reads, reference);

    let validation = ConversionValidation {
        overall_pass: metrics.overall_efficiency >= threshold,
        cpg_pass:     metrics.cpg_efficiency >= threshold,
        chg_pass:     metrics.chg_efficiency >= threshold,
        chh_pass:     metrics.chh_efficiency >= threshold,
    };
    info!(
        "conversion validation at threshold {}: {:?}",
        threshold, validation
    );
    Ok(validation)
}
