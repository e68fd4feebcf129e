//! # AHCKA Sensitivity Report
//!
//! Batch reporting for AHCKA clustering sensitivity experiments. Each input
//! CSV is one sweep over the parameter k with the metrics observed per run
//! (Accuracy, F1-score, NMI, Runtime, Memory). For every sweep the tool
//! renders a dual-axis chart (clustering scores left, runtime right) and
//! collects the best-accuracy row; the collected rows are written once, at
//! the end, as a summary table.
//!
//! ## Pipeline
//!
//! ```text
//! for each file (fixed order):  load -> render chart -> pick best row
//! finally:                      write ahcka_summary_table.csv
//! ```
//!
//! Processing is single-threaded and strictly sequential; the first error
//! aborts the run and artifacts already written stay on disk.
//!
//! ## Usage
//!
//! ```bash
//! # Reads the six sweep CSVs from the working directory and writes
//! # charts + summary into sensitivity_output/.
//! cargo run -p ahcka-sensitivity --bin sensitivity-report
//! ```

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod runner;
pub mod summary;

// Re-export key types for convenience
pub use chart::render_sweep_chart;
pub use config::{ReportConfig, DEFAULT_INPUT_FILES, K_TICKS};
pub use dataset::{dataset_name, load_sweep, SweepRow, SweepTable};
pub use error::ReportError;
pub use runner::{RunReport, SensitivityRunner, SUMMARY_FILE};
pub use summary::{best_row, write_summary, SummaryRow};
