//! SVG figures for the ratio and constants tests.

mod chart;
mod options;

pub use chart::{Panel, draw_figure, fit_panel, padded_range, ratio_panel};
pub use options::RenderOptions;

use crate::errors::AnalysisError;
use crate::types::{FitReport, RatioSeries};
use std::path::Path;

pub const DEFAULT_RATIO_FIGURE: &str = "test_rapport.svg";
pub const DEFAULT_FIT_FIGURE: &str = "test_constantes.svg";

/// One ratio panel per series, in the given order.
///
/// # Errors
/// See [`draw_figure`].
pub fn render_ratio(path: &Path, series: &[RatioSeries], opts: &RenderOptions) -> Result<usize, AnalysisError> {
    let panels: Vec<Panel> = series.iter().filter(|s| !s.is_empty()).map(ratio_panel).collect();
    draw_figure(path, &panels, opts)
}

/// One constants-test panel per report, in the given order.
///
/// # Errors
/// See [`draw_figure`].
pub fn render_fit(path: &Path, reports: &[FitReport], opts: &RenderOptions) -> Result<usize, AnalysisError> {
    let panels: Vec<Panel> = reports.iter().filter(|r| !r.points.is_empty()).map(fit_panel).collect();
    draw_figure(path, &panels, opts)
}
