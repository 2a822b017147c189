//! Likelihood-weighted resampling.
//!
//! Draws parameter sets from the persisted prior candidates with
//! probability proportional to their likelihood weight. Each request
//! returns a fresh [`Resample`]; the strategy itself holds no draw state.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::SmallRng;

use crate::error::Error;

use super::samples::SampleTable;

/// One resample request's output: `n` (seed, probability) pairs drawn
/// with replacement, index-aligned.
#[derive(Debug, Clone)]
pub struct Resample {
    pub seeds: Vec<u64>,
    pub mortality_probs: Vec<f64>,
}

/// Resampling strategy over a weighted sample table.
#[derive(Debug, Clone)]
pub struct RandomSampling {
    table: SampleTable,
    dist: WeightedIndex<f64>,
}

impl RandomSampling {
    /// Build the weighted distribution. Fails when the table carries no
    /// weight column or the weights cannot form a distribution (all zero).
    pub fn new(table: SampleTable) -> Result<Self, Error> {
        let weights = table.weights.as_ref().ok_or_else(|| Error::MissingWeights {
            path: table.path.clone(),
        })?;
        let dist = WeightedIndex::new(weights.iter().copied())
            .map_err(|e| Error::DegenerateWeights {
                reason: e.to_string(),
            })?;
        Ok(Self { table, dist })
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// Draw `n` weighted samples with replacement.
    pub fn resample(&self, n: usize, rng: &mut SmallRng) -> Resample {
        let mut seeds = Vec::with_capacity(n);
        let mut mortality_probs = Vec::with_capacity(n);
        for _ in 0..n {
            let i = self.dist.sample(rng);
            seeds.push(self.table.seeds[i]);
            mortality_probs.push(self.table.mortality_probs[i]);
        }
        Resample {
            seeds,
            mortality_probs,
        }
    }
}
