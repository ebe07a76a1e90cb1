//! Named filter definitions.

use ripple_core::Filter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One named set of filter coefficients as stored in a filter bank.
///
/// Coefficients are kept as written; normalization happens when the
/// definition is built into a [`Filter`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterDefinition {
    /// Unique name within the bank.
    pub name: String,

    /// Numerator `b`, at least two taps.
    pub numerator: Vec<f64>,

    /// Denominator `a`; defaults to `[1.0]` (FIR).
    #[serde(default = "default_denominator")]
    pub denominator: Vec<f64>,

    /// Caller metadata carried onto the built filter.
    #[serde(default)]
    pub low_pass: bool,
}

fn default_denominator() -> Vec<f64> {
    vec![1.0]
}

impl FilterDefinition {
    /// A FIR definition with the given numerator.
    pub fn new(name: impl Into<String>, numerator: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            numerator: numerator.into(),
            denominator: default_denominator(),
            low_pass: false,
        }
    }

    /// Set the denominator.
    pub fn with_denominator(mut self, denominator: impl Into<Vec<f64>>) -> Self {
        self.denominator = denominator.into();
        self
    }

    /// Mark the definition as a low-pass filter.
    pub fn low_pass(mut self, low_pass: bool) -> Self {
        self.low_pass = low_pass;
        self
    }

    /// True when the definition has no feedback terms.
    pub fn is_fir(&self) -> bool {
        self.denominator.iter().skip(1).all(|&a| a == 0.0)
    }

    /// Builds a filter with zeroed history.
    pub fn build(&self) -> Result<Filter, ConfigError> {
        Filter::new(&self.numerator, &self.denominator, self.low_pass)
            .map_err(|e| ConfigError::invalid_filter(&self.name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_fir() {
        let def = FilterDefinition::new("avg", vec![0.5, 0.5]);
        assert_eq!(def.denominator, vec![1.0]);
        assert!(def.is_fir());
        assert!(!def.low_pass);
    }

    #[test]
    fn builder_sets_fields() {
        let def = FilterDefinition::new("smooth", vec![0.569, 1.1381, 0.569])
            .with_denominator(vec![1.0, 0.9428, 0.3333])
            .low_pass(true);
        assert!(!def.is_fir());
        assert!(def.low_pass);
    }

    #[test]
    fn build_normalizes() {
        let def = FilterDefinition::new("n", vec![2.5, 3.0]).with_denominator(vec![2.0, 3.0]);
        let filter = def.build().unwrap();
        assert_eq!(filter.numerator(), &[1.25, 1.5]);
        assert_eq!(filter.denominator(), &[1.0, 1.5]);
    }

    #[test]
    fn build_reports_definition_name() {
        let def = FilterDefinition::new("broken", vec![1.0]);
        let err = def.build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFilter { ref name, .. } if name == "broken"));
    }

    #[test]
    fn denominator_defaults_when_missing() {
        let def: FilterDefinition = toml::from_str(
            r#"
name = "fir"
numerator = [1.0, -1.0]
"#,
        )
        .unwrap();
        assert_eq!(def.denominator, vec![1.0]);
        assert!(!def.low_pass);
    }
}
