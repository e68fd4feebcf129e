//! Report configuration: input file list, output location, chart geometry.
//!
//! The defaults reproduce the fixed AHCKA sensitivity run: six dataset
//! sweeps, charts and summary written to `sensitivity_output/`. The config
//! is an explicit value threaded through the pipeline rather than process
//! state, so tests can point it at scratch directories.

use std::path::PathBuf;

/// The six sensitivity sweeps of the AHCKA evaluation, in report order.
pub const DEFAULT_INPUT_FILES: [&str; 6] = [
    "sensitivity_k_results_coauthorship_cora.csv",
    "sensitivity_k_results_coauthorship_dblp.csv",
    "sensitivity_k_results_cocitation_citeseer.csv",
    "sensitivity_k_results_cocitation_cora.csv",
    "sensitivity_k_results_npz_20news.csv",
    "sensitivity_k_results_npz_query.csv",
];

/// x-axis tick positions, matching the k values highlighted in the AHCKA paper.
pub const K_TICKS: [u64; 5] = [2, 50, 100, 500, 1000];

/// Chart raster size in pixels: 8x5 inches at 300 dpi.
pub const FIGURE_SIZE: (u32, u32) = (2400, 1500);

/// Configuration for one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Sweep CSV paths, processed strictly in this order.
    pub input_files: Vec<PathBuf>,
    /// Directory receiving the charts and the summary table.
    pub output_dir: PathBuf,
    /// Fixed x-axis tick set, applied regardless of the k values present.
    pub k_ticks: Vec<u64>,
    /// Chart raster size in pixels.
    pub figure_size: (u32, u32),
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_files: DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from("sensitivity_output"),
            k_ticks: K_TICKS.to_vec(),
            figure_size: FIGURE_SIZE,
        }
    }
}

impl ReportConfig {
    /// Config over the default file list, writing into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}
