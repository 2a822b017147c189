//! Summary statistics over simulated outcomes.

use serde::Serialize;

use super::SimulationError;

/// Mean and percentile projection interval over a set of outcome values.
///
/// Values are sorted once at construction; interval queries are
/// nearest-rank lookups and may be repeated with different `alpha`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStat {
    sorted: Vec<f64>,
    mean: f64,
}

impl SummaryStat {
    pub fn new(mut values: Vec<f64>) -> Result<Self, SimulationError> {
        if values.is_empty() {
            return Err(SimulationError::EmptySummary);
        }
        values.sort_by(f64::total_cmp);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Ok(Self {
            sorted: values,
            mean,
        })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Projection interval `[quantile(alpha/2), quantile(1 - alpha/2)]`
    /// at significance level `alpha` in (0, 1).
    pub fn proj_interval(&self, alpha: f64) -> Result<(f64, f64), SimulationError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(SimulationError::InvalidAlpha(alpha));
        }
        Ok((self.quantile(alpha / 2.0), self.quantile(1.0 - alpha / 2.0)))
    }

    /// Nearest-rank quantile over the sorted values.
    fn quantile(&self, q: f64) -> f64 {
        let idx = (q * (self.sorted.len() - 1) as f64).round() as usize;
        self.sorted[idx.min(self.sorted.len() - 1)]
    }
}
