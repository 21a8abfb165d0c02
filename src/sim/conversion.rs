use log::warn;
use rand::Rng;

use crate::data_structs::typedef::DensityType;
use crate::data_structs::{
    ConvertedSequence,
    MethylationPattern,
    Sequence,
};
use crate::utils::ensure_rate;

/// Applies bisulfite conversion to `sequence` under `pattern`.
///
/// Methylated cytosines resist conversion unconditionally; unmethylated
/// cytosines convert to thymine with probability `efficiency`. All
/// other bases are copied through, so the output length always equals
/// the input length.
///
/// A pattern shorter than the sequence is degraded data, not an error:
/// positions past the pattern end are converted probabilistically
/// without methylation gating.
pub fn apply_conversion<R: Rng + ?Sized>(
    rng: &mut R,
    sequence: &Sequence,
    pattern: &MethylationPattern,
    efficiency: DensityType,
) -> anyhow::Result<ConvertedSequence> {
    ensure_rate("efficiency", efficiency)?;

    if pattern.len() < sequence.len() {
        warn!(
            "methylation pattern covers {} of {} positions; converting the \
             remainder without methylation gating",
            pattern.len(),
            sequence.len()
        );
    }

    let mut converted = Vec::with_capacity(sequence.len());
    for (pos, base) in sequence.as_bytes().iter().enumerate() {
        if *base != b'C' {
            converted.push(*base);
            continue;
        }
        let out = match pattern.get(pos) {
            Some(true) => b'C',
            _ if rng.gen_bool(efficiency) => b'T',
            _ => b'C',
        };
        converted.push(out);
    }
    Ok(Sequence::from_raw(converted))
}
