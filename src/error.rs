use std::path::PathBuf;

use thiserror::Error;

/// Pipeline-wide error type. Every variant carries enough context (file
/// path, batch index) to diagnose a failed run from the message alone;
/// nothing is recovered locally and a failure on any stage aborts the run.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// A required input column is missing, a row is short, or a field does
    /// not parse (match type, CPC).
    #[error("malformed input {path:?}: {detail}")]
    MalformedInput { path: PathBuf, detail: String },

    /// The estimation service failed, returned an unexpected response
    /// shape, or returned the wrong number of estimates for a batch.
    #[error("traffic estimation failed on batch {batch_index}: {source}")]
    EstimationService {
        batch_index: usize,
        #[source]
        source: anyhow::Error,
    },

    /// The report target could not be created or written.
    #[error("cannot write report {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Zero estimates were produced; no report file is created.
    #[error("no estimates to write, report not created")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
