//! Run settings for calibrated-model construction.
//!
//! The samples directory is an explicit configuration value rather than a
//! hidden constant; `SURVSIM_OUTPUT_DIR` overrides the default for
//! deployments that relocate the calibration output.

use std::path::PathBuf;

use crate::calibration::CalibMethod;

/// Directory the calibration run writes its sample files to, unless
/// overridden by [`OUTPUT_DIR_ENV`].
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment override for the samples directory.
pub const OUTPUT_DIR_ENV: &str = "SURVSIM_OUTPUT_DIR";

/// Read the samples directory from the environment, falling back to
/// [`DEFAULT_OUTPUT_DIR`].
pub fn default_output_dir() -> PathBuf {
    std::env::var(OUTPUT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// Settings for one [`crate::CalibratedModel`].
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// Calibration method name: `"random"` or `"mcmc"`.
    pub calib_method: String,
    /// Explicit samples file; when `None` the path is derived from
    /// `output_dir` and the method name.
    pub samples_csv: Option<PathBuf>,
    /// Directory holding `samples_<method>.csv` files.
    pub output_dir: PathBuf,
    /// Scalar applied to every sampled mortality probability. 1 means no
    /// effect adjustment.
    pub drug_effectiveness_ratio: f64,
    /// Seed for the model-owned RNG that drives weighted resampling.
    pub resample_seed: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            calib_method: "random".to_string(),
            samples_csv: None,
            output_dir: default_output_dir(),
            drug_effectiveness_ratio: 1.0,
            resample_seed: 42,
        }
    }
}

impl ModelSettings {
    /// Resolve the samples file path for `method`: the explicit path when
    /// given, else `<output_dir>/samples_<method>.csv`.
    pub fn samples_path(&self, method: CalibMethod) -> PathBuf {
        match &self.samples_csv {
            Some(path) => path.clone(),
            None => self
                .output_dir
                .join(format!("samples_{}.csv", method.name())),
        }
    }
}
