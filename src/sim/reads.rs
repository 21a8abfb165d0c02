use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data_structs::typedef::{
    DensityType,
    NUCLEOTIDES,
};
use crate::data_structs::{
    ConvertedSequence,
    Read,
};
use crate::utils::{
    ensure_positive,
    ensure_rate,
};

/// Samples reads from a converted sequence at the target coverage.
///
/// Produces exactly `floor(len * coverage / read_length)` reads. Start
/// offsets are uniform over the positions where a full-length read
/// fits; when the sequence is shorter than `read_length` the read is
/// truncated at the sequence end. Sequencing errors are injected into
/// every read independently.
pub fn simulate_reads<R: Rng + ?Sized>(
    rng: &mut R,
    converted: &ConvertedSequence,
    coverage: usize,
    read_length: usize,
    error_rate: DensityType,
) -> anyhow::Result<Vec<Read>> {
    ensure_positive("coverage", coverage)?;
    ensure_positive("read_length", read_length)?;
    ensure_rate("error_rate", error_rate)?;

    let sequence_length = converted.len();
    let total_reads = sequence_length * coverage / read_length;
    let max_start = sequence_length.saturating_sub(read_length);
    debug!(
        "sampling {} reads of {} bp at {}x coverage",
        total_reads, read_length, coverage
    );

    let mut reads = Vec::with_capacity(total_reads);
    for _ in 0..total_reads {
        let start = rng.gen_range(0..=max_start);
        let end = usize::min(start + read_length, sequence_length);
        let mut read = Read::new(start, converted.as_bytes()[start..end].to_vec());
        add_sequencing_errors(rng, read.bases_mut(), error_rate)?;
        reads.push(read);
    }
    Ok(reads)
}

/// Substitutes each base with probability `error_rate` by a uniformly
/// chosen *different* base. Positions are independent; there are no
/// correlated error bursts.
pub fn add_sequencing_errors<R: Rng + ?Sized>(
    rng: &mut R,
    bases: &mut [u8],
    error_rate: DensityType,
) -> anyhow::Result<()> {
    ensure_rate("error_rate", error_rate)?;

    for base in bases.iter_mut() {
        if rng.gen_bool(error_rate) {
            let current = *base;
            // Three candidates remain for any valid input base.
            let candidates = NUCLEOTIDES
                .iter()
                .filter(|b| **b != current)
                .copied()
                .collect::<Vec<_>>();
            if let Some(substitute) = candidates.choose(rng) {
                *base = *substitute;
            }
        }
    }
    Ok(())
}

/// Draws a random subset of at most `count` reads, for building smaller
/// evaluation datasets out of a full simulation.
pub fn subsample_reads<R: Rng + ?Sized>(
    rng: &mut R,
    reads: &[Read],
    count: usize,
) -> Vec<Read> {
    reads
        .choose_multiple(rng, usize::min(count, reads.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sim::generate::generate_reference;

    #[test]
    fn read_count_formula() {
        let mut rng = StdRng::seed_from_u64(0);
        let converted = generate_reference(&mut rng, 10_000).unwrap();
        let reads =
            simulate_reads(&mut rng, &converted, 10, 100, 0.0).unwrap();
        assert_eq!(reads.len(), 1000);
        assert!(reads.iter().all(|r| r.len() == 100));
    }

    #[test]
    fn reads_match_source_at_zero_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let converted = generate_reference(&mut rng, 5000).unwrap();
        let reads = simulate_reads(&mut rng, &converted, 5, 80, 0.0).unwrap();
        for read in &reads {
            let start = read.start();
            assert_eq!(
                read.as_bytes(),
                &converted.as_bytes()[start..start + read.len()]
            );
        }
    }

    #[test]
    fn short_sequence_truncates() {
        let mut rng = StdRng::seed_from_u64(2);
        let converted = generate_reference(&mut rng, 50).unwrap();
        let reads =
            simulate_reads(&mut rng, &converted, 100, 80, 0.0).unwrap();
        // floor(50 * 100 / 80) = 62 reads, each truncated to the
        // sequence length starting from offset 0.
        assert_eq!(reads.len(), 62);
        for read in &reads {
            assert_eq!(read.start(), 0);
            assert_eq!(read.len(), 50);
        }
    }

    #[test]
    fn zero_error_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bases = b"ATCGATCGATCG".to_vec();
        add_sequencing_errors(&mut rng, &mut bases, 0.0).unwrap();
        assert_eq!(bases, b"ATCGATCGATCG");
    }

    #[test]
    fn full_error_rate_changes_every_base() {
        let mut rng = StdRng::seed_from_u64(4);
        let original = b"ATCGATCGATCGATCGATCG".to_vec();
        let mut bases = original.clone();
        add_sequencing_errors(&mut rng, &mut bases, 1.0).unwrap();
        for (before, after) in original.iter().zip(bases.iter()) {
            assert_ne!(before, after);
            assert!(NUCLEOTIDES.contains(after));
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(5);
        let converted = generate_reference(&mut rng, 100).unwrap();
        assert!(simulate_reads(&mut rng, &converted, 0, 10, 0.0).is_err());
        assert!(simulate_reads(&mut rng, &converted, 10, 0, 0.0).is_err());
        assert!(simulate_reads(&mut rng, &converted, 10, 10, 1.5).is_err());
    }

    #[test]
    fn subsample_bounds() {
        let mut rng = StdRng::seed_from_u64(6);
        let converted = generate_reference(&mut rng, 1000).unwrap();
        let reads =
            simulate_reads(&mut rng, &converted, 10, 100, 0.0).unwrap();
        assert_eq!(subsample_reads(&mut rng, &reads, 10).len(), 10);
        // Requesting more than available returns everything.
        assert_eq!(
            subsample_reads(&mut rng, &reads, 10_000).len(),
            reads.len()
        );
        assert!(subsample_reads(&mut rng, &[], 5).is_empty());
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let converted =
            generate_reference(&mut StdRng::seed_from_u64(7), 2000).unwrap();
        let a = simulate_reads(
            &mut StdRng::seed_from_u64(8),
            &converted,
            10,
            100,
            0.01,
        )
        .unwrap();
        let b = simulate_reads(
            &mut StdRng::seed_from_u64(8),
            &converted,
            10,
            100,
            0.01,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
