use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
};

use super::typedef::DensityType;

/// Per-context bisulfite conversion efficiency estimates.
///
/// Every field is always populated; zero-denominator contexts carry the
/// documented default rather than being absent. Field names double as
/// the stable keys consumed by reporting layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionMetrics {
    /// Efficiency aggregated over all cytosine contexts.
    pub overall_efficiency: DensityType,
    pub cpg_efficiency:     DensityType,
    pub chg_efficiency:     DensityType,
    pub chh_efficiency:     DensityType,
}

impl ConversionMetrics {
    /// Key/value view with the stable reporting keys.
    pub fn as_map(&self) -> HashMap<&'static str, DensityType> {
        HashMap::from_iter([
            ("overall_efficiency", self.overall_efficiency),
            ("cpg_efficiency", self.cpg_efficiency),
            ("chg_efficiency", self.chg_efficiency),
            ("chh_efficiency", self.chh_efficiency),
        ])
    }
}

/// Per-context methylation level estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethylationLevels {
    pub cpg_methylation: DensityType,
    pub chg_methylation: DensityType,
    pub chh_methylation: DensityType,
}

impl MethylationLevels {
    pub fn as_map(&self) -> HashMap<&'static str, DensityType> {
        HashMap::from_iter([
            ("cpg_methylation", self.cpg_methylation),
            ("chg_methylation", self.chg_methylation),
            ("chh_methylation", self.chh_methylation),
        ])
    }
}

/// Pass/fail verdicts of the conversion-efficiency validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionValidation {
    pub overall_pass: bool,
    pub cpg_pass:     bool,
    pub chg_pass:     bool,
    pub chh_pass:     bool,
}

impl ConversionValidation {
    pub fn as_map(&self) -> HashMap<&'static str, bool> {
        HashMap::from_iter([
            ("overall_pass", self.overall_pass),
            ("cpg_pass", self.cpg_pass),
            ("chg_pass", self.chg_pass),
            ("chh_pass", self.chh_pass),
        ])
    }

    /// True when every context passed.
    pub fn all_passed(&self) -> bool {
        self.overall_pass && self.cpg_pass && self.chg_pass && self.chh_pass
    }
}
