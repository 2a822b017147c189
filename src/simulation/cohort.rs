//! Cohort survival engine.
//!
//! Each cohort is a population of independent patients stepped through
//! discrete time. At every step an alive patient dies with the cohort's
//! mortality probability; a death at step `k` (1-based) records survival
//! time `k`, and patients still alive at the horizon are censored.
//!
//! Cohorts are independent and each gets its own `SmallRng` seeded from
//! its spec, so a batch is reproducible regardless of thread count.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use super::statistics::SummaryStat;
use super::SimulationError;

/// Inputs for one cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortSpec {
    pub id: u32,
    pub population: usize,
    pub mortality_prob: f64,
    pub seed: u64,
}

/// One cohort's result: the spec echoed back plus the observed deaths and
/// the mean survival time over patients who died within the horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortOutcome {
    pub id: u32,
    pub population: usize,
    pub mortality_prob: f64,
    pub seed: u64,
    pub deaths: usize,
    pub mean_survival_time: f64,
}

/// Results of a batch run, keyed by cohort id.
#[derive(Debug, Clone, Serialize)]
pub struct MultiCohortOutcomes {
    cohorts: BTreeMap<u32, CohortOutcome>,
    mean_survival_time: SummaryStat,
}

impl MultiCohortOutcomes {
    pub fn cohorts(&self) -> &BTreeMap<u32, CohortOutcome> {
        &self.cohorts
    }

    pub fn cohort(&self, id: u32) -> Option<&CohortOutcome> {
        self.cohorts.get(&id)
    }

    /// Summary statistic over the per-cohort mean survival times.
    pub fn stat_mean_survival_time(&self) -> &SummaryStat {
        &self.mean_survival_time
    }
}

/// A batch of cohorts to simulate.
#[derive(Debug, Clone)]
pub struct MultiCohort {
    specs: Vec<CohortSpec>,
}

impl MultiCohort {
    pub fn new(specs: Vec<CohortSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[CohortSpec] {
        &self.specs
    }

    /// Run every cohort for `time_steps` steps in parallel. All inputs
    /// are validated up front; a failed run returns the first error and
    /// produces no partial outcomes.
    pub fn simulate(&self, time_steps: usize) -> Result<MultiCohortOutcomes, SimulationError> {
        if self.specs.is_empty() {
            return Err(SimulationError::EmptyCohortSet);
        }
        if time_steps == 0 {
            return Err(SimulationError::ZeroHorizon);
        }
        for spec in &self.specs {
            if spec.population == 0 {
                return Err(SimulationError::ZeroPopulation { cohort: spec.id });
            }
            if !(spec.mortality_prob >= 0.0 && spec.mortality_prob <= 1.0) {
                return Err(SimulationError::InvalidProbability {
                    cohort: spec.id,
                    value: spec.mortality_prob,
                });
            }
        }

        let outcomes: Vec<CohortOutcome> = self
            .specs
            .par_iter()
            .map(|spec| simulate_cohort(spec, time_steps))
            .collect::<Result<_, _>>()?;

        let means: Vec<f64> = outcomes.iter().map(|o| o.mean_survival_time).collect();
        let mean_survival_time = SummaryStat::new(means)?;

        Ok(MultiCohortOutcomes {
            cohorts: outcomes.into_iter().map(|o| (o.id, o)).collect(),
            mean_survival_time,
        })
    }
}

/// Simulate one cohort with its own RNG.
fn simulate_cohort(
    spec: &CohortSpec,
    time_steps: usize,
) -> Result<CohortOutcome, SimulationError> {
    let mut rng = SmallRng::seed_from_u64(spec.seed);
    let mut deaths = 0usize;
    let mut survival_total = 0u64;

    for _ in 0..spec.population {
        if let Some(step) = simulate_patient(spec.mortality_prob, time_steps, &mut rng) {
            deaths += 1;
            survival_total += step as u64;
        }
    }

    if deaths == 0 {
        return Err(SimulationError::NoDeaths { cohort: spec.id });
    }

    Ok(CohortOutcome {
        id: spec.id,
        population: spec.population,
        mortality_prob: spec.mortality_prob,
        seed: spec.seed,
        deaths,
        mean_survival_time: survival_total as f64 / deaths as f64,
    })
}

/// Survival time in steps (1-based) if the patient dies within the
/// horizon, `None` if censored.
#[inline]
fn simulate_patient(mortality_prob: f64, time_steps: usize, rng: &mut SmallRng) -> Option<usize> {
    for step in 1..=time_steps {
        if rng.random_bool(mortality_prob) {
            return Some(step);
        }
    }
    None
}
