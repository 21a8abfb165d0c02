//! Estimation and quality-control tools for bisulfite sequencing data.
//!
//! All estimators re-scan reads against the *original, unconverted*
//! reference: context is derived from the reference at the read's
//! recorded offset, and the observed read base is compared with the
//! expected one. Reads are assumed perfectly registered to the
//! reference; no alignment is modeled.
//!
//! Key submodules:
//!
//! - [`efficiency`]: per-context conversion-efficiency estimation,
//!   including the historical clamping of reported values.
//! - [`levels`]: per-context methylation-level estimation.
//! - [`qc`]: lambda-control conversion ratio, CHH background check and
//!   threshold validation.

mod counts;
pub mod efficiency;
pub mod levels;
pub mod qc;

pub use efficiency::{
    calculate_conversion_efficiency,
    clamp_reported_efficiency,
};
pub use levels::calculate_methylation_levels;
pub use qc::{
    calculate_chh_background,
    calculate_lambda_dna_conversion,
    validate_conversion_efficiency,
};
