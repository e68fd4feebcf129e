//! Error taxonomy for the sensitivity report pipeline.
//!
//! Every failure is fatal: the runner propagates the first error to the
//! caller and makes no attempt to continue with the remaining files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing the sensitivity report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure (missing input, unwritable output directory, ...).
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed results table: missing column, mistyped cell, bad quoting.
    #[error("malformed results table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input file name does not follow the `sensitivity_k_results_<dataset>.csv`
    /// convention the dataset name is derived from.
    #[error("file name {file_name:?} does not match sensitivity_k_results_<dataset>.csv")]
    DatasetName { file_name: String },

    /// A results table with no data rows has no best-accuracy row.
    #[error("results table {path} contains no rows")]
    EmptyTable { path: PathBuf },

    /// Chart rendering or raster write failure.
    #[error("failed to render chart {path}: {message}")]
    Chart { path: PathBuf, message: String },
}
