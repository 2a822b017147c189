//! The calibrated survival model.
//!
//! Thin orchestration over the calibration strategies and the cohort
//! engine: pick parameter draws, apply the drug-effectiveness ratio, run
//! the cohorts, and expose the projection interval of the mean survival
//! time.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::calibration::{CalibMethod, Calibration};
use crate::config::ModelSettings;
use crate::error::Error;
use crate::priors::PriorRanges;
use crate::simulation::{CohortSpec, MultiCohort, MultiCohortOutcomes};

/// A survival model driven by a calibrated parameter distribution.
///
/// The calibration strategy is fixed at construction. Simulation results
/// are absent until the first successful [`simulate`](Self::simulate) and
/// replaced by each subsequent one; a failed call leaves the previous
/// result untouched.
#[derive(Debug)]
pub struct CalibratedModel {
    calibration: Calibration,
    drug_effectiveness_ratio: f64,
    resample_rng: SmallRng,
    cohorts: Option<MultiCohortOutcomes>,
}

impl CalibratedModel {
    /// Load the samples file named by `settings` into the selected
    /// calibration strategy. Fails on an unknown method name or any load
    /// failure; no recovery is attempted.
    pub fn new(settings: &ModelSettings, priors: &PriorRanges) -> Result<Self, Error> {
        let method = CalibMethod::parse(&settings.calib_method)?;
        let path = settings.samples_path(method);
        let calibration = Calibration::load(method, &path, priors)?;
        Ok(Self {
            calibration,
            drug_effectiveness_ratio: settings.drug_effectiveness_ratio,
            resample_rng: SmallRng::seed_from_u64(settings.resample_seed),
            cohorts: None,
        })
    }

    pub fn method(&self) -> CalibMethod {
        self.calibration.method()
    }

    pub fn drug_effectiveness_ratio(&self) -> f64 {
        self.drug_effectiveness_ratio
    }

    /// Simulate `num_of_simulated_cohorts` cohorts of `cohort_size`
    /// patients over `time_steps` steps.
    ///
    /// The resampling strategy draws that many fresh weighted samples;
    /// the MCMC strategy takes the chain's last `num_of_simulated_cohorts`
    /// entries in order. Cohort `i` uses the `i`-th selected seed, and
    /// every selected mortality probability is scaled by the
    /// drug-effectiveness ratio before the run.
    pub fn simulate(
        &mut self,
        num_of_simulated_cohorts: usize,
        cohort_size: usize,
        time_steps: usize,
    ) -> Result<(), Error> {
        let (seeds, mortality_probs) = match &self.calibration {
            Calibration::Random(strategy) => {
                let draw = strategy.resample(num_of_simulated_cohorts, &mut self.resample_rng);
                (draw.seeds, draw.mortality_probs)
            }
            Calibration::Mcmc(strategy) => {
                let tail = strategy.posterior_tail(num_of_simulated_cohorts)?;
                (tail.seeds, tail.mortality_probs)
            }
        };

        let specs: Vec<CohortSpec> = seeds
            .iter()
            .zip(&mortality_probs)
            .enumerate()
            .map(|(i, (&seed, &prob))| CohortSpec {
                id: i as u32,
                population: cohort_size,
                mortality_prob: prob * self.drug_effectiveness_ratio,
                seed,
            })
            .collect();

        let outcomes = MultiCohort::new(specs).simulate(time_steps)?;
        self.cohorts = Some(outcomes);
        Ok(())
    }

    /// The stored multi-cohort result, if any simulation has succeeded.
    pub fn outcomes(&self) -> Option<&MultiCohortOutcomes> {
        self.cohorts.as_ref()
    }

    /// Mean survival time across simulated cohorts and its projection
    /// interval at significance level `alpha`. May be called repeatedly
    /// with different `alpha`.
    pub fn mean_survival_time_proj_interval(
        &self,
        alpha: f64,
    ) -> Result<(f64, (f64, f64)), Error> {
        let outcomes = self.cohorts.as_ref().ok_or(Error::NoSimulationResults)?;
        let stat = outcomes.stat_mean_survival_time();
        let interval = stat.proj_interval(alpha)?;
        Ok((stat.mean(), interval))
    }
}
