use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use bsqc::prelude::*;
use clap::Args;
use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct SimulateArgs {
    #[arg(long, default_value_t = 10_000, help = "Reference length in bp.")]
    length: usize,

    #[arg(long, default_value_t = 0.70, help = "CpG methylation rate.")]
    cpg_rate: f64,

    #[arg(long, default_value_t = 0.20, help = "CHG methylation rate.")]
    chg_rate: f64,

    #[arg(long, default_value_t = 0.05, help = "CHH methylation rate.")]
    chh_rate: f64,

    #[arg(long, default_value_t = 0.99, help = "Bisulfite conversion efficiency.")]
    efficiency: f64,

    #[arg(long, default_value_t = 100, help = "Read length in bp.")]
    read_length: usize,

    #[arg(long, default_value_t = 10, help = "Target average coverage.")]
    coverage: usize,

    #[arg(long, default_value_t = 0.001, help = "Per-base sequencing error rate.")]
    error_rate: f64,

    #[arg(long, help = "Generate periodic GC-rich islands in the reference.")]
    islands: bool,

    #[arg(long, default_value_t = 42, help = "Random seed.")]
    seed: u64,

    #[arg(
        long,
        default_value_t = bsqc::tools::qc::DEFAULT_VALIDATION_THRESHOLD,
        help = "Minimum acceptable conversion efficiency."
    )]
    threshold: f64,

    #[arg(short, long, help = "Path for a JSON report of all metrics.")]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct QcReport {
    metrics:           ConversionMetrics,
    levels:            MethylationLevels,
    lambda_conversion: f64,
    chh_background:    f64,
    validation:        ConversionValidation,
}

impl SimulateArgs {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::default()
            .with_sequence_length(self.length)
            .with_cpg_rate(self.cpg_rate)
            .with_chg_rate(self.chg_rate)
            .with_chh_rate(self.chh_rate)
            .with_conversion_efficiency(self.efficiency)
            .with_read_length(self.read_length)
            .with_coverage(self.coverage)
            .with_error_rate(self.error_rate)
            .with_island_profile(self.islands.then(IslandProfile::default))
    }

    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = self.config();
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let output = run_simulation(&mut rng, &config)?;

        let metrics =
            calculate_conversion_efficiency(&output.reads, &output.reference);
        let levels =
            calculate_methylation_levels(&output.reads, &output.reference);
        let lambda_conversion =
            calculate_lambda_dna_conversion(&output.reads);
        let chh_background =
            calculate_chh_background(&output.reads, &output.reference);
        let validation = validate_conversion_efficiency(
            &output.reads,
            &output.reference,
            self.threshold,
        )?;

        let report = QcReport {
            metrics,
            levels,
            lambda_conversion,
            chh_background,
            validation,
        };
        print_report(&output, &report, self.threshold);

        if let Some(path) = &self.output {
            let mut file = File::create(path)?;
            file.write_all(serde_json::to_string_pretty(&report)?.as_bytes())?;
            eprintln!("Report written to {}", path.display());
        }
        Ok(())
    }
}

fn print_report(
    output: &SimulationOutput,
    report: &QcReport,
    threshold: f64,
) {
    println!(
        "{}",
        style("Bisulfite conversion QC summary").bold().underlined()
    );
    println!(
        "Reference: {} bp (GC {:.1}%), reads: {}",
        output.reference.len(),
        output.reference.gc_fraction() * 100.0,
        output.reads.len()
    );
    println!();

    println!("{}", style("Conversion efficiency").bold());
    for (key, value) in [
        ("overall", report.metrics.overall_efficiency),
        ("CpG", report.metrics.cpg_efficiency),
        ("CHG", report.metrics.chg_efficiency),
        ("CHH", report.metrics.chh_efficiency),
    ] {
        let styled = if value >= threshold {
            style(format!("{:.4}", value)).green()
        }
        else {
            style(format!("{:.4}", value)).red()
        };
        println!("  {:<8} {}", key, styled);
    }
    println!();

    println!("{}", style("Methylation levels").bold());
    println!("  {:<8} {:.4}", "CpG", report.levels.cpg_methylation);
    println!("  {:<8} {:.4}", "CHG", report.levels.chg_methylation);
    println!("  {:<8} {:.4}", "CHH", report.levels.chh_methylation);
    println!();

    println!(
        "Lambda-control conversion: {:.4}",
        report.lambda_conversion
    );
    println!("CHH background: {:.4}", report.chh_background);

    let verdict = if report.validation.all_passed() {
        style("PASS").green().bold()
    }
    else {
        style("FAIL").red().bold()
    };
    println!(
        "Validation at threshold {:.2}: {}",
        threshold, verdict
    );
}
