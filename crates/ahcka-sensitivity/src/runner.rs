//! Sequential report pipeline: load, render, summarize each sweep in the
//! configured order, then write the summary table once at the end.

use std::path::PathBuf;

use tracing::info;

use crate::chart::render_sweep_chart;
use crate::config::ReportConfig;
use crate::dataset::load_sweep;
use crate::error::ReportError;
use crate::summary::{best_row, write_summary, SummaryRow};

/// Name of the summary table written into the output directory.
pub const SUMMARY_FILE: &str = "ahcka_summary_table.csv";

/// Artifacts produced by one complete run.
#[derive(Debug)]
pub struct RunReport {
    /// Chart paths, one per input file, in processing order.
    pub charts: Vec<PathBuf>,
    /// Path of the written summary table.
    pub summary_path: PathBuf,
    /// Summary rows, one per input file, in processing order.
    pub rows: Vec<SummaryRow>,
}

/// Sensitivity report runner.
///
/// Strictly sequential: each file is fully processed before the next one is
/// opened, and the first error aborts the run. Artifacts already written
/// stay on disk.
pub struct SensitivityRunner {
    config: ReportConfig,
}

impl SensitivityRunner {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over the configured file list.
    pub fn run(&self) -> Result<RunReport, ReportError> {
        // Idempotent: succeeds if the directory already exists.
        std::fs::create_dir_all(&self.config.output_dir).map_err(|e| ReportError::Io {
            path: self.config.output_dir.clone(),
            source: e,
        })?;

        let mut charts = Vec::with_capacity(self.config.input_files.len());
        let mut rows = Vec::with_capacity(self.config.input_files.len());

        for path in &self.config.input_files {
            let table = load_sweep(path)?;
            let chart = render_sweep_chart(
                &table,
                &self.config.output_dir,
                &self.config.k_ticks,
                self.config.figure_size,
            )?;
            let row = best_row(&table).ok_or_else(|| ReportError::EmptyTable {
                path: path.clone(),
            })?;
            info!(
                dataset = %table.dataset,
                best_k = row.best_k,
                chart = %chart.display(),
                "processed sensitivity sweep"
            );
            charts.push(chart);
            rows.push(row);
        }

        let summary_path = self.config.output_dir.join(SUMMARY_FILE);
        write_summary(&summary_path, &rows)?;
        info!(
            sweeps = rows.len(),
            summary = %summary_path.display(),
            "sensitivity report complete"
        );

        Ok(RunReport {
            charts,
            summary_path,
            rows,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}
