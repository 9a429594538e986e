//! Plot rendering.
//!
//! One PNG per benchmark per style, written into style-specific
//! subdirectories of the plot output root:
//!
//! ```text
//! plots/
//! ├── standard_plots/adpcm_dec_standard.png
//! ├── box_plots/adpcm_dec_box.png
//! ├── violin_plots/adpcm_dec_violin.png
//! ├── cdf_plots/adpcm_dec_cdf.png
//! └── error_bar_plots/adpcm_dec_error_bar.png
//! ```
//!
//! Single-tree figures draw one series per configuration. Cross-solution
//! comparison figures (see [`render_comparison`]) stack one panel per
//! configuration with one series per solution.

mod boxes;
mod cdf;
mod compare;
mod error_bar;
mod standard;
mod violin;

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::discover::{discover_benchmarks, gather_benchmark};
use crate::error::AnalysisError;

pub use compare::render_comparison;

/// Available plot styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotStyle {
    Standard,
    Box,
    Violin,
    Cdf,
    ErrorBar,
}

impl PlotStyle {
    pub const ALL: [PlotStyle; 5] = [
        PlotStyle::Standard,
        PlotStyle::Box,
        PlotStyle::Violin,
        PlotStyle::Cdf,
        PlotStyle::ErrorBar,
    ];

    /// Style-specific output subdirectory.
    pub fn dir_name(self) -> &'static str {
        match self {
            PlotStyle::Standard => "standard_plots",
            PlotStyle::Box => "box_plots",
            PlotStyle::Violin => "violin_plots",
            PlotStyle::Cdf => "cdf_plots",
            PlotStyle::ErrorBar => "error_bar_plots",
        }
    }

    /// Filename suffix, as in `<benchmark>_<suffix>.png`.
    pub fn file_suffix(self) -> &'static str {
        match self {
            PlotStyle::Standard => "standard",
            PlotStyle::Box => "box",
            PlotStyle::Violin => "violin",
            PlotStyle::Cdf => "cdf",
            PlotStyle::ErrorBar => "error_bar",
        }
    }

    fn title_word(self) -> &'static str {
        match self {
            PlotStyle::Standard => "Standard",
            PlotStyle::Box => "Box",
            PlotStyle::Violin => "Violin",
            PlotStyle::Cdf => "CDF",
            PlotStyle::ErrorBar => "Error Bar",
        }
    }
}

/// Render every style for every discovered benchmark.
///
/// Benchmarks without data in any configuration are skipped with a
/// diagnostic.
///
/// # Errors
///
/// Output directory creation failures abort the run; so do rendering
/// failures, since they indicate a broken output target rather than bad
/// input data.
pub fn render_benchmarks(config: &AnalysisConfig) -> Result<(), AnalysisError> {
    let benchmarks = discover_benchmarks(&config.reference_dir())?;
    let plots_dir = config.plots_dir();

    for style in PlotStyle::ALL {
        let dir = plots_dir.join(style.dir_name());
        fs::create_dir_all(&dir).map_err(|source| AnalysisError::OutputDir { path: dir, source })?;
    }

    for benchmark in &benchmarks {
        let series = gather_benchmark(&config.root_dir, &config.configurations, benchmark);
        if series.is_empty() {
            warn!(%benchmark, "no data in any configuration, skipping plots");
            continue;
        }
        for style in PlotStyle::ALL {
            let path = plots_dir
                .join(style.dir_name())
                .join(format!("{benchmark}_{}.png", style.file_suffix()));
            let title = format!(
                "{} Plot of Execution Times for {benchmark}",
                style.title_word()
            );
            render_one(style, &path, &title, &series, (config.plot.width, config.plot.height))?;
            info!(path = %path.display(), "wrote plot");
        }
    }
    Ok(())
}

/// Render a single figure of the given style to `path`.
pub fn render_one(
    style: PlotStyle,
    path: &Path,
    title: &str,
    series: &[(String, Vec<f64>)],
    size: (u32, u32),
) -> Result<(), AnalysisError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    draw(style, &root, title, series)?;
    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw(
    style: PlotStyle,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    series: &[(String, Vec<f64>)],
) -> Result<(), AnalysisError> {
    match style {
        PlotStyle::Standard => standard::draw(area, title, series),
        PlotStyle::Box => boxes::draw(area, title, series),
        PlotStyle::Violin => violin::draw(area, title, series),
        PlotStyle::Cdf => cdf::draw(area, title, series),
        PlotStyle::ErrorBar => error_bar::draw(area, title, series),
    }
}

fn plot_err<E: std::fmt::Display>(err: E) -> AnalysisError {
    AnalysisError::Plot(err.to_string())
}

fn series_color(idx: usize) -> RGBAColor {
    Palette99::pick(idx).mix(1.0)
}

/// Min/max over all samples of all series, padded so the axis never
/// collapses to a zero-height range.
fn value_range(series: &[(String, Vec<f64>)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, samples) in series {
        for &value in samples {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (max.abs() * 0.1).max(1.0)
    };
    (min - pad, max + pad)
}
