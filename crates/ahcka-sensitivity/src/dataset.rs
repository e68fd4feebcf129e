//! Sweep table loading and dataset-name derivation.
//!
//! Each input CSV holds one sensitivity sweep: one row per tested k with the
//! clustering metrics for that run. Column headers are fixed
//! (`k, Accuracy, F1-score, NMI, Runtime, Memory (MB)`); anything missing or
//! mistyped is a fatal load error.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ReportError;

/// File name prefix every sweep CSV carries.
pub const FILE_PREFIX: &str = "sensitivity_k_results_";
/// File name suffix every sweep CSV carries.
pub const FILE_SUFFIX: &str = ".csv";

/// One sweep measurement: the metrics observed for a single value of k.
///
/// Accuracy, F1 and NMI are expected in [0, 1] but not validated; the
/// loader only enforces presence and numeric type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SweepRow {
    /// The swept parameter value.
    pub k: u64,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "F1-score")]
    pub f1_score: f64,
    #[serde(rename = "NMI")]
    pub nmi: f64,
    /// Wall-clock runtime in seconds.
    #[serde(rename = "Runtime")]
    pub runtime_s: f64,
    /// Peak memory in megabytes.
    #[serde(rename = "Memory (MB)")]
    pub memory_mb: f64,
}

/// One loaded sweep, in source row order.
#[derive(Debug, Clone)]
pub struct SweepTable {
    /// Dataset the sweep was run on, derived from the file name.
    pub dataset: String,
    /// Rows in file order. Order matters: ties on best accuracy are
    /// broken by first occurrence.
    pub rows: Vec<SweepRow>,
}

/// Derive the dataset name from a sweep file name.
///
/// `sensitivity_k_results_coauthorship_cora.csv` -> `coauthorship_cora`.
/// The affixes are validated rather than blindly stripped: a file name
/// missing either one is rejected instead of producing a silently wrong
/// dataset label.
pub fn dataset_name(file_name: &str) -> Result<String, ReportError> {
    file_name
        .strip_prefix(FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ReportError::DatasetName {
            file_name: file_name.to_owned(),
        })
}

/// Load one sweep CSV into a [`SweepTable`].
///
/// The dataset name comes from the path's final component. Fails on a
/// missing file, a path without a valid file name, or any row csv/serde
/// cannot deserialize into a [`SweepRow`].
pub fn load_sweep(path: &Path) -> Result<SweepTable, ReportError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReportError::DatasetName {
            file_name: path.display().to_string(),
        })?;
    let dataset = dataset_name(file_name)?;

    let file = std::fs::File::open(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for record in reader.deserialize::<SweepRow>() {
        rows.push(record.map_err(|e| ReportError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?);
    }

    debug!(dataset = %dataset, rows = rows.len(), "loaded sensitivity sweep");
    Ok(SweepTable { dataset, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dataset_name_strips_both_affixes() {
        let name = dataset_name("sensitivity_k_results_coauthorship_cora.csv").unwrap();
        assert_eq!(name, "coauthorship_cora");
    }

    #[test]
    fn dataset_name_rejects_missing_prefix() {
        let err = dataset_name("k_results_cora.csv").unwrap_err();
        assert!(matches!(err, ReportError::DatasetName { .. }));
    }

    #[test]
    fn dataset_name_rejects_missing_suffix() {
        let err = dataset_name("sensitivity_k_results_cora.txt").unwrap_err();
        assert!(matches!(err, ReportError::DatasetName { .. }));
    }

    #[test]
    fn dataset_name_rejects_affixes_only() {
        let err = dataset_name("sensitivity_k_results_.csv").unwrap_err();
        assert!(matches!(err, ReportError::DatasetName { .. }));
    }

    #[test]
    fn load_sweep_reads_all_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensitivity_k_results_npz_20news.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "k,Accuracy,F1-score,NMI,Runtime,Memory (MB)").unwrap();
        writeln!(file, "2,0.70,0.68,0.55,1.25,310.5").unwrap();
        writeln!(file, "50,0.85,0.82,0.61,2.50,325.0").unwrap();
        drop(file);

        let table = load_sweep(&path).unwrap();
        assert_eq!(table.dataset, "npz_20news");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].k, 2);
        assert!((table.rows[1].accuracy - 0.85).abs() < f64::EPSILON);
        assert!((table.rows[1].memory_mb - 325.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_sweep_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensitivity_k_results_absent.csv");
        let err = load_sweep(&path).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn load_sweep_fails_on_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensitivity_k_results_bad.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        // No NMI column.
        writeln!(file, "k,Accuracy,F1-score,Runtime,Memory (MB)").unwrap();
        writeln!(file, "2,0.70,0.68,1.25,310.5").unwrap();
        drop(file);

        let err = load_sweep(&path).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }

    #[test]
    fn load_sweep_fails_on_mistyped_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensitivity_k_results_bad.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "k,Accuracy,F1-score,NMI,Runtime,Memory (MB)").unwrap();
        writeln!(file, "not_a_number,0.70,0.68,0.55,1.25,310.5").unwrap();
        drop(file);

        let err = load_sweep(&path).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }
}
