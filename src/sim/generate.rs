use log::debug;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    DensityType,
    NUCLEOTIDES,
};
use crate::data_structs::Sequence;
use crate::utils::{
    ensure_positive,
    ensure_rate,
};
use crate::with_field_fn;

/// Periodic high-GC island structure for generated references.
///
/// An island of `island_length` bases starts at every multiple of
/// `interval`; everything else is background. Within islands and
/// background, G/C bases are drawn with the configured total fraction,
/// split evenly between G and C (and likewise A/T).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandProfile {
    pub interval:      usize,
    pub island_length: usize,
    pub island_gc:     DensityType,
    pub background_gc: DensityType,
}

impl IslandProfile {
    with_field_fn!(interval, usize);

    with_field_fn!(island_length, usize);

    with_field_fn!(island_gc, DensityType);

    with_field_fn!(background_gc, DensityType);

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_positive("interval", self.interval)?;
        ensure_positive("island_length", self.island_length)?;
        ensure_rate("island_gc", self.island_gc)?;
        ensure_rate("background_gc", self.background_gc)?;
        Ok(())
    }

    fn is_island(
        &self,
        pos: usize,
    ) -> bool {
        pos % self.interval < self.island_length
    }
}

impl Default for IslandProfile {
    fn default() -> Self {
        Self {
            interval:      5_000,
            island_length: 500,
            island_gc:     0.60,
            background_gc: 0.40,
        }
    }
}

/// Generates a reference sequence of `length` bases drawn uniformly
/// from {A, T, C, G}.
pub fn generate_reference<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> anyhow::Result<Sequence> {
    ensure_positive("length", length)?;
    debug!("generating uniform reference of {} bp", length);

    let bases = (0..length)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect();
    Ok(Sequence::from_raw(bases))
}

/// Generates a reference with periodic GC-rich islands.
pub fn generate_reference_with_islands<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    profile: &IslandProfile,
) -> anyhow::Result<Sequence> {
    ensure_positive("length", length)?;
    profile.validate()?;
    debug!(
        "generating structured reference of {} bp (islands of {} bp every {} \
         bp, GC {}/{})",
        length,
        profile.island_length,
        profile.interval,
        profile.island_gc,
        profile.background_gc
    );

    // NUCLEOTIDES order is A, T, C, G.
    let weights = |gc: DensityType| [(1.0 - gc) / 2.0, (1.0 - gc) / 2.0, gc / 2.0, gc / 2.0];
    let island_dist = WeightedIndex::new(weights(profile.island_gc))?;
    let background_dist = WeightedIndex::new(weights(profile.background_gc))?;

    let mut bases = Vec::with_capacity(length);
    for pos in 0..length {
        let dist = if profile.is_island(pos) {
            &island_dist
        }
        else {
            &background_dist
        };
        bases.push(NUCLEOTIDES[dist.sample(rng)]);
    }
    Ok(Sequence::from_raw(bases))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_reference(&mut rng, 0).is_err());
        assert!(generate_reference_with_islands(
            &mut rng,
            0,
            &IslandProfile::default()
        )
        .is_err());
    }

    #[test]
    fn uniform_composition() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = generate_reference(&mut rng, 100_000).unwrap();
        assert_eq!(seq.len(), 100_000);
        // Uniform draws put GC near 0.5.
        assert!((seq.gc_fraction() - 0.5).abs() < 0.02);
    }

    #[test]
    fn island_composition() {
        let mut rng = StdRng::seed_from_u64(2);
        let profile = IslandProfile::default();
        let seq =
            generate_reference_with_islands(&mut rng, 50_000, &profile).unwrap();
        assert_eq!(seq.len(), 50_000);

        // Islands occupy 500 of every 5000 bp: expected GC is
        // 0.1 * 0.6 + 0.9 * 0.4 = 0.42.
        assert!((seq.gc_fraction() - 0.42).abs() < 0.02);

        // The first island itself should be visibly GC-rich.
        let island = Sequence::try_from(seq.as_bytes()[..500].to_vec()).unwrap();
        assert!((island.gc_fraction() - 0.6).abs() < 0.08);
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let a = generate_reference(&mut StdRng::seed_from_u64(7), 1000).unwrap();
        let b = generate_reference(&mut StdRng::seed_from_u64(7), 1000).unwrap();
        assert_eq!(a, b);
    }
}
