//! # survsim — calibrated survival-model simulation
//!
//! Consumes the persisted output of a calibration run (likelihood-weighted
//! prior draws or an MCMC chain of accepted draws) and uses it to drive
//! forward simulation of multiple patient cohorts, reporting projection
//! intervals for mean survival time.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Load | [`calibration::samples`] | Read `samples_<method>.csv` (seeds, mortality probabilities, likelihood weights) |
//! | Select | [`calibration`] | Weighted resample ([`calibration::resampling`]) or chain tail ([`calibration::mcmc`]) |
//! | Adjust | [`model`] | Scale each selected probability by the drug-effectiveness ratio |
//! | Simulate | [`simulation::cohort`] | One seeded cohort per draw, per-step Bernoulli mortality, horizon censoring |
//! | Report | [`simulation::statistics`] | Mean survival time with a percentile projection interval |
//!
//! The two calibration strategies are a fixed choice made at model
//! construction; [`CalibratedModel`] dispatches on them exhaustively.
//! Cohort `i` always runs with the `i`-th selected seed, so any batch is
//! reproducible from the samples file and the settings alone.

pub mod calibration;
pub mod config;
pub mod error;
pub mod model;
pub mod priors;
pub mod simulation;

pub use config::ModelSettings;
pub use error::Error;
pub use model::CalibratedModel;
pub use priors::PriorRanges;
