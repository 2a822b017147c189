//! Calibration strategies over persisted parameter samples.
//!
//! - [`samples`]: the persisted sample table (CSV load + validation)
//! - [`resampling`]: likelihood-weighted resampling with replacement
//! - [`mcmc`]: tail selection from an MCMC chain of accepted draws

pub mod mcmc;
pub mod resampling;
pub mod samples;

pub use mcmc::{ChainTail, McmcSampling};
pub use resampling::{RandomSampling, Resample};
pub use samples::SampleTable;

use std::path::Path;

use crate::error::Error;
use crate::priors::PriorRanges;

/// Recognized calibration methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibMethod {
    Random,
    Mcmc,
}

impl CalibMethod {
    /// Parse a method name. Anything other than `"random"` or `"mcmc"`
    /// is a configuration error.
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            "random" => Ok(Self::Random),
            "mcmc" => Ok(Self::Mcmc),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Mcmc => "mcmc",
        }
    }
}

/// One loaded calibration strategy. The variant is fixed at construction;
/// callers dispatch with an exhaustive match.
#[derive(Debug, Clone)]
pub enum Calibration {
    Random(RandomSampling),
    Mcmc(McmcSampling),
}

impl Calibration {
    /// Load the samples file at `path` into the strategy for `method`.
    /// Any load failure aborts construction; no recovery is attempted.
    pub fn load(method: CalibMethod, path: &Path, priors: &PriorRanges) -> Result<Self, Error> {
        let table = SampleTable::load(path, priors)?;
        match method {
            CalibMethod::Random => Ok(Self::Random(RandomSampling::new(table)?)),
            CalibMethod::Mcmc => Ok(Self::Mcmc(McmcSampling::new(table))),
        }
    }

    pub fn method(&self) -> CalibMethod {
        match self {
            Self::Random(_) => CalibMethod::Random,
            Self::Mcmc(_) => CalibMethod::Mcmc,
        }
    }
}
