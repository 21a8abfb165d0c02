pub use crate::data_structs::typedef::{
    CountType,
    DensityType,
    PosType,
};
pub use crate::data_structs::{
    Context,
    ConversionMetrics,
    ConversionValidation,
    ConvertedSequence,
    MethylationLevels,
    MethylationPattern,
    Read,
    Sequence,
};
pub use crate::sim::{
    run_simulation,
    IslandProfile,
    SimulationConfig,
    SimulationOutput,
};
pub use crate::tools::{
    calculate_chh_background,
    calculate_conversion_efficiency,
    calculate_lambda_dna_conversion,
    calculate_methylation_levels,
    validate_conversion_efficiency,
};
