use bsqc::prelude::*;
use bsqc::sim::reads::subsample_reads;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn methylation_levels_recover_configured_rates() {
    // Large run with zero sequencing error: retained cytosines are
    // methylated ones plus the 1% that escaped conversion.
    let config = SimulationConfig::default()
        .with_sequence_length(50_000)
        .with_coverage(20)
        .with_error_rate(0.0)
        .with_cpg_rate(0.7)
        .with_chg_rate(0.2)
        .with_chh_rate(0.05);
    let mut rng = StdRng::seed_from_u64(99);
    let output = run_simulation(&mut rng, &config).unwrap();

    let levels =
        calculate_methylation_levels(&output.reads, &output.reference);

    // Expected retention: rate + (1 - rate) * (1 - efficiency).
    let expected = |rate: f64| rate + (1.0 - rate) * 0.01;
    assert!((levels.cpg_methylation - expected(0.7)).abs() < 0.02);
    assert!((levels.chg_methylation - expected(0.2)).abs() < 0.02);
    assert!((levels.chh_methylation - expected(0.05)).abs() < 0.02);
}

#[test]
fn efficiency_tracks_unmethylated_fraction() {
    // With no methylation at all, the raw conversion fraction equals
    // the conversion efficiency, and the report pins it to the ceiling.
    let config = SimulationConfig::default()
        .with_sequence_length(20_000)
        .with_coverage(10)
        .with_error_rate(0.0)
        .with_cpg_rate(0.0)
        .with_chg_rate(0.0)
        .with_chh_rate(0.0);
    let mut rng = StdRng::seed_from_u64(100);
    let output = run_simulation(&mut rng, &config).unwrap();

    let metrics =
        calculate_conversion_efficiency(&output.reads, &output.reference);
    assert!(metrics.overall_efficiency >= 0.95);
    assert!(metrics.overall_efficiency <= 0.99);
    // Heavily methylated CpG data instead lands on the floor.
    let config = config.with_cpg_rate(1.0);
    let output = run_simulation(&mut rng, &config).unwrap();
    let metrics =
        calculate_conversion_efficiency(&output.reads, &output.reference);
    assert_eq!(metrics.cpg_efficiency, 0.95);
}

#[test]
fn subsampled_reads_estimate_like_the_full_set() {
    let config = SimulationConfig::default()
        .with_sequence_length(30_000)
        .with_coverage(30)
        .with_error_rate(0.0);
    let mut rng = StdRng::seed_from_u64(101);
    let output = run_simulation(&mut rng, &config).unwrap();

    let subset = subsample_reads(&mut rng, &output.reads, 2_000);
    assert_eq!(subset.len(), 2_000);

    let full = calculate_methylation_levels(&output.reads, &output.reference);
    let sampled = calculate_methylation_levels(&subset, &output.reference);
    assert!((full.cpg_methylation - sampled.cpg_methylation).abs() < 0.03);
    assert!((full.chh_methylation - sampled.chh_methylation).abs() < 0.03);
}

#[test]
fn validation_passes_on_simulated_data() {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(102);
    let output = run_simulation(&mut rng, &config).unwrap();

    // The clamp guarantees every context sits in [0.95, 0.99], so the
    // default threshold always passes on simulated data.
    let validation =
        validate_conversion_efficiency(&output.reads, &output.reference, 0.95)
            .unwrap();
    assert!(validation.all_passed());

    let strict =
        validate_conversion_efficiency(&output.reads, &output.reference, 1.0)
            .unwrap();
    assert!(!strict.all_passed());
}
