//! Helper macros and shared boundary checks used across the crate.

use anyhow::ensure;

use crate::data_structs::typedef::DensityType;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}
pub use with_field_fn;

/// Rejects probabilities and rates outside [0, 1].
pub(crate) fn ensure_rate(
    name: &str,
    value: DensityType,
) -> anyhow::Result<()> {
    ensure!(
        (0.0..=1.0).contains(&value),
        "{} must lie in [0, 1], got {}",
        name,
        value
    );
    Ok(())
}

/// Rejects zero lengths, coverages and counts.
pub(crate) fn ensure_positive(
    name: &str,
    value: usize,
) -> anyhow::Result<()> {
    ensure!(value > 0, "{} must be positive, got {}", name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_bounds() {
        assert!(ensure_rate("rate", 0.0).is_ok());
        assert!(ensure_rate("rate", 1.0).is_ok());
        assert!(ensure_rate("rate", 0.5).is_ok());
        assert!(ensure_rate("rate", -0.01).is_err());
        assert!(ensure_rate("rate", 1.01).is_err());
        assert!(ensure_rate("rate", f64::NAN).is_err());
    }

    #[test]
    fn positive_bounds() {
        assert!(ensure_positive("length", 1).is_ok());
        assert!(ensure_positive("length", 0).is_err());
    }
}
