//! Log-scale box plot of failure proxies across block-count settings.

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::stats::quartiles;

/// Default output path for the rendered box plot.
pub const DEFAULT_PLOT_PATH: &str = "plots/example-1.svg";

/// Render one vertical box per block-count setting, y axis log-scaled.
///
/// Column `i` of `matrix` holds the failure proxies for `n_block = 2^i`.
/// Outliers beyond the 1.5·IQR whiskers are not drawn, and the axis range is
/// taken from the whisker extents so a handful of extreme trials cannot
/// flatten the plot. Non-finite proxies (from zero-probability trials) are
/// excluded. The parent directory of `out_path` is created if missing.
pub fn render_failure_boxplot(out_path: &Path, matrix: &[Vec<f64>]) -> Result<(), Box<dyn Error>> {
    let finite: Vec<(usize, Vec<f64>)> = matrix
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let col: Vec<f64> = col.iter().copied().filter(|v| v.is_finite()).collect();
            (i, col)
        })
        .filter(|(_, col)| !col.is_empty())
        .collect();
    if finite.is_empty() {
        return Err("no finite failure values to plot".into());
    }

    // Axis range from whisker extents, clamped to the observed data.
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;
    for (_, col) in &finite {
        let (q1, _, q3) = quartiles(col);
        let iqr = q3 - q1;
        let data_lo = col.iter().copied().fold(f64::INFINITY, f64::min);
        let data_hi = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        y_lo = y_lo.min(data_lo.max(q1 - 1.5 * iqr));
        y_hi = y_hi.max(data_hi.min(q3 + 1.5 * iqr));
    }
    let y_lo = (y_lo * 0.8).max(1e-3);
    let mut y_hi = y_hi * 1.25;
    if y_hi <= y_lo {
        y_hi = y_lo * 10.0;
    }

    if let Some(dir) = out_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let root = SVGBackend::new(out_path, (960, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = matrix.len();
    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(46)
        .y_label_area_size(68)
        .build_cartesian_2d(-1.0f64..n as f64, (y_lo as f32..y_hi as f32).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("The number of blocks (half of the problem dimension)")
        .y_desc("Expected number of failures for LinTS")
        .x_labels(n + 2)
        .x_label_formatter(&|x| {
            let k = x.round();
            if (x - k).abs() < 1e-9 && k >= 0.0 && (k as usize) < n {
                format!("2^{}", k as u32)
            } else {
                String::new()
            }
        })
        .draw()?;

    chart.draw_series(finite.iter().map(|(i, col)| {
        Boxplot::new_vertical(*i as f64, &Quartiles::new(col))
            .width(14)
            .whisker_width(0.6)
            .style(BLUE)
    }))?;

    root.present()?;
    Ok(())
}
