//! Prior ranges for calibrated parameters.
//!
//! The calibration run that produced the samples file drew candidates from
//! these ranges; loading re-checks that every persisted value still lies
//! inside its prior support.

use std::collections::BTreeMap;

/// Column name of the calibrated parameter in the samples file.
pub const MORTALITY_PROB: &str = "Mortality Probability";

/// Uniform prior over the per-step mortality probability.
pub const MORTALITY_PROB_RANGE: (f64, f64) = (0.05, 0.25);

/// Parameter name → inclusive allowed range.
#[derive(Debug, Clone, Default)]
pub struct PriorRanges {
    ranges: BTreeMap<String, (f64, f64)>,
}

impl PriorRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, name: &str, lower: f64, upper: f64) -> Self {
        self.ranges.insert(name.to_string(), (lower, upper));
        self
    }

    /// The prior set used by the survival model: a uniform range over the
    /// mortality probability.
    pub fn survival_default() -> Self {
        Self::new().with_range(
            MORTALITY_PROB,
            MORTALITY_PROB_RANGE.0,
            MORTALITY_PROB_RANGE.1,
        )
    }

    pub fn range(&self, name: &str) -> Option<(f64, f64)> {
        self.ranges.get(name).copied()
    }

    /// Whether `value` lies inside the prior support for `name`.
    /// Parameters without a declared range are unconstrained.
    pub fn supports(&self, name: &str, value: f64) -> bool {
        match self.ranges.get(name) {
            Some((lower, upper)) => value >= *lower && value <= *upper,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survival_default_bounds_mortality_prob() {
        let priors = PriorRanges::survival_default();
        assert_eq!(priors.range(MORTALITY_PROB), Some(MORTALITY_PROB_RANGE));
        assert!(priors.supports(MORTALITY_PROB, 0.05));
        assert!(priors.supports(MORTALITY_PROB, 0.25));
        assert!(!priors.supports(MORTALITY_PROB, 0.3));
        assert!(!priors.supports(MORTALITY_PROB, 0.01));
    }

    #[test]
    fn undeclared_parameter_is_unconstrained() {
        let priors = PriorRanges::survival_default();
        assert!(priors.supports("Discount Rate", 42.0));
        assert_eq!(priors.range("Discount Rate"), None);
    }
}
