//! Best-accuracy summarization and the summary table writer.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::dataset::SweepTable;
use crate::error::ReportError;

/// Best-accuracy row of one sweep, ready for the summary table.
///
/// Quality metrics carry 3 decimals, resource metrics 2, matching the
/// published AHCKA tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Dataset")]
    pub dataset: String,
    #[serde(rename = "Best k")]
    pub best_k: u64,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "F1-score")]
    pub f1_score: f64,
    #[serde(rename = "NMI")]
    pub nmi: f64,
    #[serde(rename = "Runtime (s)")]
    pub runtime_s: f64,
    #[serde(rename = "Memory (MB)")]
    pub memory_mb: f64,
}

/// Select the best-accuracy row of a sweep.
///
/// Stable argmax: when several rows tie for maximum accuracy the first one
/// in table order wins. Returns `None` for an empty table.
pub fn best_row(table: &SweepTable) -> Option<SummaryRow> {
    let best = table.rows.iter().reduce(|best, row| {
        if row.accuracy > best.accuracy {
            row
        } else {
            best
        }
    })?;

    debug!(
        dataset = %table.dataset,
        best_k = best.k,
        accuracy = best.accuracy,
        "selected best-accuracy row"
    );

    Some(SummaryRow {
        dataset: table.dataset.clone(),
        best_k: best.k,
        accuracy: round_to(best.accuracy, 3),
        f1_score: round_to(best.f1_score, 3),
        nmi: round_to(best.nmi, 3),
        runtime_s: round_to(best.runtime_s, 2),
        memory_mb: round_to(best.memory_mb, 2),
    })
}

/// Write the summary table as CSV: header row, no index column, one row per
/// processed sweep in processing order. Overwrites silently.
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<(), ReportError> {
    let io_err = |e: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row).map_err(|e| ReportError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Round half away from zero at `decimals` places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
