use crate::errors::AnalysisError;
use crate::fsutil;
use crate::types::{FitReport, RatioSeries};
use crate::utils::num::{grid_rows, u64_to_f64, usize_to_u32_saturating};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

use super::options::RenderOptions;

/// One subplot: scattered measurements plus a connecting or fitted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub scatter: Vec<(f64, f64)>,
    pub line: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// `[lo * 0.9, hi * 1.1]` for positive data, widened so the range is never empty.
#[must_use]
pub fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    let a = lo - 0.1 * lo.abs();
    let b = hi + 0.1 * hi.abs();
    if b > a { a..b } else { (a - 1.0)..(b + 1.0) }
}

/// Panel for the ratio test of one algorithm.
#[must_use]
pub fn ratio_panel(series: &RatioSeries) -> Panel {
    let pts: Vec<(f64, f64)> = series.points.iter().map(|p| (u64_to_f64(p.input_size), p.ratio)).collect();
    let (x_lo, x_hi) = min_max(pts.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_lo, y_hi) = series.bounds().unwrap_or((0.0, 1.0));
    Panel {
        title: format!("Ratio test {}", series.algorithm),
        x_desc: "input size".to_string(),
        y_desc: format!("f(x) / {}", series.label),
        line: pts.clone(),
        scatter: pts,
        x_range: padded_range(x_lo, x_hi),
        y_range: padded_range(y_lo, y_hi),
    }
}

/// Panel for the constants test of one algorithm: points and the fitted line.
#[must_use]
pub fn fit_panel(report: &FitReport) -> Panel {
    let line = match &report.regression {
        Some(reg) => report.points.iter().map(|&(x, _)| (x, reg.predict(x))).collect(),
        None => Vec::new(),
    };
    let x_hi = min_max(report.points.iter().map(|p| p.0)).map_or(1.0, |(_, hi)| hi);
    let (y_lo, y_hi) = min_max(report.points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let x_range = if x_hi > 0.0 { 0.0..x_hi * 1.1 } else { padded_range(x_hi, 0.0) };
    Panel {
        title: format!("Constants test {}", report.algorithm),
        x_desc: format!("f(x) = {}", report.label),
        y_desc: "time".to_string(),
        scatter: report.points.clone(),
        line,
        x_range,
        y_range: padded_range(y_lo, y_hi),
    }
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &Panel, opts: &RenderOptions) -> Result<(), AnalysisError> {
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", f64::from(opts.font_size)).into_font())
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())
        .map_err(AnalysisError::render)?;
    chart
        .configure_mesh()
        .x_desc(&panel.x_desc)
        .y_desc(&panel.y_desc)
        .draw()
        .map_err(AnalysisError::render)?;
    chart
        .draw_series(LineSeries::new(panel.line.iter().copied(), &BLUE))
        .map_err(AnalysisError::render)?;
    chart
        .draw_series(panel.scatter.iter().map(|&(x, y)| Circle::new((x, y), 3, RED.filled())))
        .map_err(AnalysisError::render)?;
    Ok(())
}

/// Draw `panels` into an SVG grid at `path`, replacing it atomically.
///
/// Returns the number of panels drawn; nothing is written for zero panels.
///
/// # Errors
/// I/O errors creating or persisting the file, `Render` for drawing failures.
pub fn draw_figure(path: &Path, panels: &[Panel], opts: &RenderOptions) -> Result<usize, AnalysisError> {
    if panels.is_empty() {
        log::warn!("render: nothing to draw for {}", path.display());
        return Ok(0);
    }
    let cols = opts.columns.clamp(1, panels.len());
    let rows = grid_rows(panels.len(), cols);
    let height = opts.panel_height.saturating_mul(usize_to_u32_saturating(rows));
    let tmp = fsutil::temp_sibling(path)?;
    {
        let root = SVGBackend::new(tmp.path(), (opts.width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(AnalysisError::render)?;
        let areas = root.split_evenly((rows, cols));
        for (area, panel) in areas.iter().zip(panels) {
            draw_panel(area, panel, opts)?;
        }
        root.present().map_err(AnalysisError::render)?;
    }
    fsutil::persist(tmp, path)?;
    log::info!("render: {} panels -> {}", panels.len(), path.display());
    Ok(panels.len())
}
