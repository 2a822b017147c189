//! Multi-cohort survival simulation and outcome statistics.
//!
//! - [`cohort`]: the cohort engine (per-step mortality, one seed per cohort)
//! - [`statistics`]: mean + percentile projection interval over outcomes

pub mod cohort;
pub mod statistics;

pub use cohort::{CohortOutcome, CohortSpec, MultiCohort, MultiCohortOutcomes};
pub use statistics::SummaryStat;

use thiserror::Error;

/// Failures raised by the simulation collaborator. These propagate to the
/// caller unchanged; there are no retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("mortality probability {value} for cohort {cohort} is outside [0, 1]")]
    InvalidProbability { cohort: u32, value: f64 },

    #[error("no cohorts to simulate")]
    EmptyCohortSet,

    #[error("cohort {cohort} has population 0")]
    ZeroPopulation { cohort: u32 },

    #[error("simulation horizon must be at least 1 step")]
    ZeroHorizon,

    #[error("cohort {cohort} recorded no deaths within the horizon")]
    NoDeaths { cohort: u32 },

    #[error("significance level {0} is outside (0, 1)")]
    InvalidAlpha(f64),

    #[error("summary statistic requires at least one value")]
    EmptySummary,
}
