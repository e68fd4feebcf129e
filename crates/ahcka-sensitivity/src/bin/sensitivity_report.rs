//! Sensitivity report entrypoint.
//!
//! Runs the fixed AHCKA sensitivity report: six sweep CSVs from the working
//! directory in, charts and summary table under `sensitivity_output/` out.
//! No flags; log verbosity comes from `RUST_LOG` (default `info`).

use tracing_subscriber::EnvFilter;

use ahcka_sensitivity::{ReportConfig, SensitivityRunner};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ReportConfig::default();
    let output_dir = config.output_dir.clone();

    let runner = SensitivityRunner::new(config);
    runner.run()?;

    println!(
        "All plots and summary table generated in '{}'",
        output_dir.display()
    );
    Ok(())
}
