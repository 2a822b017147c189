//! Crate-level errors.
//!
//! Construction-time failures (bad method string, unreadable samples file)
//! are fatal to construction; collaborator failures (`ChainTooShort`,
//! [`SimulationError`]) propagate to the caller unchanged.

use std::path::PathBuf;

use thiserror::Error;

use crate::simulation::SimulationError;

#[derive(Debug, Error)]
pub enum Error {
    /// The calibration method string was not one of the recognized values.
    #[error("unknown calibration method `{0}` (expected `random` or `mcmc`)")]
    UnknownMethod(String),

    /// The samples file could not be read or parsed as CSV.
    #[error("cannot read samples file {path:?}: {source}")]
    SampleFile { path: PathBuf, source: csv::Error },

    /// A required column is absent from the samples file header.
    #[error("samples file {path:?} is missing column `{column}`")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// The samples file parsed but held no data rows.
    #[error("samples file {path:?} contains no data rows")]
    EmptySamples { path: PathBuf },

    /// A data row held a missing, unparseable, or out-of-support value.
    /// `row` is 1-based and counts the header line.
    #[error("samples file {path:?}, row {row}: {reason}")]
    InvalidSample {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    /// The resampling strategy needs likelihood weights, but the samples
    /// file has no weight column.
    #[error("samples file {path:?} has no `Likelihood Weight` column, required for resampling")]
    MissingWeights { path: PathBuf },

    /// The likelihood weights cannot form a sampling distribution
    /// (for instance, all zero).
    #[error("resample weights are unusable: {reason}")]
    DegenerateWeights { reason: String },

    /// More posterior draws were requested than the MCMC chain holds.
    #[error("posterior chain holds {available} samples but {requested} were requested")]
    ChainTooShort { requested: usize, available: usize },

    /// The projection-interval accessor was called before any successful
    /// `simulate`.
    #[error("no simulation results available; run simulate first")]
    NoSimulationResults,

    /// A failure raised by the cohort-simulation collaborator.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
