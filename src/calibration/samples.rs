//! The persisted calibration sample table.
//!
//! A calibration run writes one CSV per method with a header row and the
//! columns `Seed`, `Mortality Probability`, and (for resampling)
//! `Likelihood Weight`. The file is read once at load time and the handle
//! dropped; row-level failures carry the 1-based row number.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::Error;
use crate::priors::{PriorRanges, MORTALITY_PROB};

pub const SEED_COLUMN: &str = "Seed";
pub const WEIGHT_COLUMN: &str = "Likelihood Weight";

/// Parallel columns of one samples file. `weights` is present only when
/// the file carries a `Likelihood Weight` column.
#[derive(Debug, Clone)]
pub struct SampleTable {
    pub path: PathBuf,
    pub seeds: Vec<u64>,
    pub mortality_probs: Vec<f64>,
    pub weights: Option<Vec<f64>>,
}

impl SampleTable {
    /// Read and validate the samples file at `path`. Every mortality
    /// probability must be finite and inside the prior support; weights,
    /// when present, must be finite and non-negative.
    pub fn load(path: &Path, priors: &PriorRanges) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)
            .map_err(|source| Error::SampleFile {
                path: path.to_path_buf(),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| Error::SampleFile {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let seed_col = column(SEED_COLUMN).ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: SEED_COLUMN,
        })?;
        let prob_col = column(MORTALITY_PROB).ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: MORTALITY_PROB,
        })?;
        let weight_col = column(WEIGHT_COLUMN);

        let mut seeds = Vec::new();
        let mut mortality_probs = Vec::new();
        let mut weights = weight_col.map(|_| Vec::new());

        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(|source| Error::SampleFile {
                path: path.to_path_buf(),
                source,
            })?;
            // header is row 1
            let row = i + 2;

            let seed: u64 = parse_field(&record, seed_col, SEED_COLUMN, path, row)?;
            let prob: f64 = parse_field(&record, prob_col, MORTALITY_PROB, path, row)?;
            if !prob.is_finite() || !priors.supports(MORTALITY_PROB, prob) {
                return Err(Error::InvalidSample {
                    path: path.to_path_buf(),
                    row,
                    reason: format!("mortality probability {prob} is outside the prior support"),
                });
            }

            if let (Some(col), Some(ws)) = (weight_col, weights.as_mut()) {
                let weight: f64 = parse_field(&record, col, WEIGHT_COLUMN, path, row)?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidSample {
                        path: path.to_path_buf(),
                        row,
                        reason: format!(
                            "likelihood weight {weight} is not a finite non-negative number"
                        ),
                    });
                }
                ws.push(weight);
            }

            seeds.push(seed);
            mortality_probs.push(prob);
        }

        if seeds.is_empty() {
            return Err(Error::EmptySamples {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            seeds,
            mortality_probs,
            weights,
        })
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

fn parse_field<T>(
    record: &StringRecord,
    col: usize,
    name: &str,
    path: &Path,
    row: usize,
) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let cell = record.get(col).ok_or_else(|| Error::InvalidSample {
        path: path.to_path_buf(),
        row,
        reason: format!("missing `{name}` value"),
    })?;
    cell.parse().map_err(|e| Error::InvalidSample {
        path: path.to_path_buf(),
        row,
        reason: format!("cannot parse `{name}` value `{cell}`: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_weighted_table() {
        let file = write_file(
            "Seed,Mortality Probability,Likelihood Weight\n\
             11,0.10,0.5\n\
             12,0.20,1.5\n",
        );
        let table = SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap();
        assert_eq!(table.seeds, vec![11, 12]);
        assert_eq!(table.mortality_probs, vec![0.10, 0.20]);
        assert_eq!(table.weights, Some(vec![0.5, 1.5]));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn loads_chain_without_weights() {
        let file = write_file(
            "Seed,Mortality Probability\n\
             1,0.08\n\
             2,0.09\n\
             3,0.11\n",
        );
        let table = SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.weights.is_none());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = SampleTable::load(
            Path::new("/nonexistent/samples_random.csv"),
            &PriorRanges::survival_default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::SampleFile { .. }));
    }

    #[test]
    fn missing_probability_column_is_rejected() {
        let file = write_file("Seed,Weight\n1,0.5\n");
        let err =
            SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingColumn {
                column: MORTALITY_PROB,
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_cell_reports_row() {
        let file = write_file(
            "Seed,Mortality Probability\n\
             1,0.10\n\
             2,not-a-number\n",
        );
        let err =
            SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap_err();
        match err {
            Error::InvalidSample { row, .. } => assert_eq!(row, 3),
            other => panic!("expected InvalidSample, got {other:?}"),
        }
    }

    #[test]
    fn out_of_prior_probability_is_rejected() {
        let file = write_file("Seed,Mortality Probability\n1,0.90\n");
        let err =
            SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap_err();
        assert!(matches!(err, Error::InvalidSample { row: 2, .. }));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let file = write_file(
            "Seed,Mortality Probability,Likelihood Weight\n\
             1,0.10,-0.5\n",
        );
        let err =
            SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap_err();
        assert!(matches!(err, Error::InvalidSample { row: 2, .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_file("Seed,Mortality Probability\n");
        let err =
            SampleTable::load(file.path(), &PriorRanges::survival_default()).unwrap_err();
        assert!(matches!(err, Error::EmptySamples { .. }));
    }
}
