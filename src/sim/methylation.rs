use log::debug;
use rand::Rng;

use crate::data_structs::typedef::DensityType;
use crate::data_structs::{
    Context,
    MethylationPattern,
    Sequence,
};
use crate::utils::ensure_rate;

/// Assigns a methylation state to every position of `sequence`.
///
/// Each cytosine is classified through [`Context::classify`] (with its
/// end-of-sequence CHH default) and marked methylated with the rate of
/// its context; the draws are independent per position. Non-cytosine
/// positions are always unmethylated, and the returned pattern is as
/// long as the sequence.
pub fn simulate_methylation_pattern<R: Rng + ?Sized>(
    rng: &mut R,
    sequence: &Sequence,
    cpg_rate: DensityType,
    chg_rate: DensityType,
    chh_rate: DensityType,
) -> anyhow::Result<MethylationPattern> {
    ensure_rate("cpg_rate", cpg_rate)?;
    ensure_rate("chg_rate", chg_rate)?;
    ensure_rate("chh_rate", chh_rate)?;

    let seq = sequence.as_bytes();
    let mut flags = Vec::with_capacity(seq.len());
    for pos in 0..seq.len() {
        let methylated = match Context::classify(seq, pos) {
            Some(Context::CG) => rng.gen_bool(cpg_rate),
            Some(Context::CHG) => rng.gen_bool(chg_rate),
            Some(Context::CHH) => rng.gen_bool(chh_rate),
            None => false,
        };
        flags.push(methylated);
    }

    let pattern = MethylationPattern::new(flags);
    debug!(
        "assigned methylation to {} of {} positions",
        pattern.count_methylated(),
        pattern.len()
    );
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sim::generate::generate_reference;

    #[test]
    fn pattern_matches_sequence_length() {
        let mut rng = StdRng::seed_from_u64(0);
        let seq = generate_reference(&mut rng, 5000).unwrap();
        let pattern =
            simulate_methylation_pattern(&mut rng, &seq, 0.7, 0.2, 0.05)
                .unwrap();
        assert_eq!(pattern.len(), seq.len());
    }

    #[test]
    fn non_cytosines_never_methylated() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = generate_reference(&mut rng, 5000).unwrap();
        // Rate 1.0 methylates every cytosine, so any `true` at a non-C
        // position would be a classification leak.
        let pattern =
            simulate_methylation_pattern(&mut rng, &seq, 1.0, 1.0, 1.0)
                .unwrap();
        for (pos, methylated) in pattern.iter().enumerate() {
            assert_eq!(methylated, seq.get(pos) == Some(b'C'));
        }
    }

    #[test]
    fn zero_rates_leave_everything_unmethylated() {
        let mut rng = StdRng::seed_from_u64(2);
        let seq = generate_reference(&mut rng, 5000).unwrap();
        let pattern =
            simulate_methylation_pattern(&mut rng, &seq, 0.0, 0.0, 0.0)
                .unwrap();
        assert_eq!(pattern.count_methylated(), 0);
    }

    #[test]
    fn rejects_invalid_rates() {
        let mut rng = StdRng::seed_from_u64(3);
        let seq = Sequence::try_from("ACGT").unwrap();
        assert!(
            simulate_methylation_pattern(&mut rng, &seq, 1.1, 0.0, 0.0).is_err()
        );
        assert!(
            simulate_methylation_pattern(&mut rng, &seq, 0.5, -0.2, 0.0)
                .is_err()
        );
    }

    // Law of large numbers: over many CpG cytosines the empirical
    // methylated fraction converges to the configured rate.
    #[test]
    fn cpg_rate_converges() {
        use statrs::distribution::{
            Binomial,
            Discrete,
        };

        let mut rng = StdRng::seed_from_u64(4);
        let seq = generate_reference(&mut rng, 400_000).unwrap();
        let rate = 0.7;
        let pattern =
            simulate_methylation_pattern(&mut rng, &seq, rate, 0.0, 0.0)
                .unwrap();

        let bytes = seq.as_bytes();
        let (mut total, mut methylated) = (0u64, 0u64);
        for pos in 0..bytes.len() {
            if Context::classify(bytes, pos) == Some(Context::CG) {
                total += 1;
                if pattern.get(pos) == Some(true) {
                    methylated += 1;
                }
            }
        }

        // Roughly 1/16 of positions are CpG cytosines.
        assert!(total > 20_000);
        let observed = methylated as f64 / total as f64;
        // Six binomial standard deviations around the configured rate.
        let sigma = (rate * (1.0 - rate) / total as f64).sqrt();
        assert!(
            (observed - rate).abs() < 6.0 * sigma,
            "observed {} vs expected {} (sigma {})",
            observed,
            rate,
            sigma
        );

        // Sanity: the binomial model itself is well-formed for these counts.
        let binom = Binomial::new(rate, total).unwrap();
        assert!(binom.pmf(methylated) > 0.0);
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let seq =
            generate_reference(&mut StdRng::seed_from_u64(5), 2000).unwrap();
        let a = simulate_methylation_pattern(
            &mut StdRng::seed_from_u64(6),
            &seq,
            0.7,
            0.2,
            0.05,
        )
        .unwrap();
        let b = simulate_methylation_pattern(
            &mut StdRng::seed_from_u64(6),
            &seq,
            0.7,
            0.2,
            0.05,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
