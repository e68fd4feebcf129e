//! Dual-axis sensitivity chart rendering.
//!
//! One PNG per sweep: clustering scores (Accuracy dashed, F1 dotted, NMI
//! solid) on the left axis clamped to [0, 1], runtime on an auto-ranged
//! right axis, one merged legend. The x ticks are pinned to the k values
//! highlighted in the AHCKA paper regardless of the values actually swept.

use std::path::{Path, PathBuf};

use plotters::coord::combinators::{BindKeyPoints, WithKeyPoints};
use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;
use tracing::debug;

use crate::dataset::SweepTable;
use crate::error::ReportError;

/// Delegating wrapper for the key-point-pinned x axis; plotters does not
/// implement `ValueFormatter` for `WithKeyPoints<RangedCoordf64>`, which
/// `configure_mesh` requires.
struct PinnedF64Axis(WithKeyPoints<RangedCoordf64>);

impl Ranged for PinnedF64Axis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

impl ValueFormatter<f64> for PinnedF64Axis {
    fn format(value: &f64) -> String {
        RangedCoordf64::format(value)
    }
}

/// Chart file location for a dataset: `ahcka_sensitivity_{dataset}.png`.
pub fn chart_path(output_dir: &Path, dataset: &str) -> PathBuf {
    output_dir.join(format!("ahcka_sensitivity_{dataset}.png"))
}

/// Render the dual-axis chart for one sweep into `output_dir`.
///
/// Overwrites an existing image silently. Returns the written path.
pub fn render_sweep_chart(
    table: &SweepTable,
    output_dir: &Path,
    k_ticks: &[u64],
    figure_size: (u32, u32),
) -> Result<PathBuf, ReportError> {
    let path = chart_path(output_dir, &table.dataset);
    draw(table, &path, k_ticks, figure_size).map_err(|e| ReportError::Chart {
        path: path.clone(),
        message: e.to_string(),
    })?;
    debug!(dataset = %table.dataset, path = %path.display(), "rendered sensitivity chart");
    Ok(path)
}

fn draw(
    table: &SweepTable,
    path: &Path,
    k_ticks: &[u64],
    (width, height): (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let ticks: Vec<f64> = k_ticks.iter().map(|&k| k as f64).collect();

    let xs = || table.rows.iter().map(|r| r.k as f64).chain(ticks.iter().copied());
    let x_min = xs().fold(f64::INFINITY, f64::min);
    let x_max = xs().fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = if x_min.is_finite() && x_max > x_min {
        (x_min, x_max)
    } else {
        (0.0, 1.0)
    };

    let runtime_max = table.rows.iter().map(|r| r.runtime_s).fold(0.0f64, f64::max);
    let runtime_max = if runtime_max > 0.0 { runtime_max * 1.05 } else { 1.0 };

    let accuracy: Vec<(f64, f64)> = table.rows.iter().map(|r| (r.k as f64, r.accuracy)).collect();
    let f1: Vec<(f64, f64)> = table.rows.iter().map(|r| (r.k as f64, r.f1_score)).collect();
    let nmi: Vec<(f64, f64)> = table.rows.iter().map(|r| (r.k as f64, r.nmi)).collect();
    let runtime: Vec<(f64, f64)> = table.rows.iter().map(|r| (r.k as f64, r.runtime_s)).collect();

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Impact of k on AHCKA Clustering ({})", table.dataset),
            ("sans-serif", 44),
        )
        .margin(24)
        .x_label_area_size(86)
        .y_label_area_size(110)
        .right_y_label_area_size(110)
        .build_cartesian_2d(
            PinnedF64Axis((x_min..x_max).with_key_points(ticks)),
            0.0f64..1.0f64,
        )?
        .set_secondary_coord(x_min..x_max, 0.0f64..runtime_max);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("k")
        .y_desc("Clustering Score")
        .axis_desc_style(("sans-serif", 32))
        .label_style(("sans-serif", 26))
        .x_label_formatter(&|v| format!("{}", *v as u64))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("Time (s)")
        .axis_desc_style(("sans-serif", 32))
        .label_style(("sans-serif", 26))
        .draw()?;

    let acc_style = BLUE.stroke_width(3);
    chart
        .draw_series(DashedLineSeries::new(accuracy, 12, 8, acc_style))?
        .label("Acc")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], acc_style));

    let f1_style = ORANGE.stroke_width(3);
    chart
        .draw_series(DashedLineSeries::new(f1, 3, 8, f1_style))?
        .label("F1")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], f1_style));

    let nmi_style = GREEN.stroke_width(3);
    chart
        .draw_series(LineSeries::new(nmi, nmi_style))?
        .label("NMI")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], nmi_style));

    let time_style = MAGENTA.stroke_width(3);
    chart
        .draw_secondary_series(LineSeries::new(runtime, time_style))?
        .label("time")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], time_style));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 26))
        .draw()?;

    root.present()?;
    Ok(())
}
