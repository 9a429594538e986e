//! Cross-solution comparison figures.
//!
//! One figure per benchmark per style: a column of panels, one panel per
//! configuration, each panel drawing one series/box/violin per solution.
//! Panels for configurations without data carry a "No data" note instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use super::{draw, plot_err, PlotStyle};
use crate::config::AnalysisConfig;
use crate::discover::benchmark_files;
use crate::error::AnalysisError;
use crate::group::{group_by_benchmark, SampleKey};
use crate::samples::load_samples;

/// Render comparison figures for every benchmark seen in any solution.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidConfig`] when the configuration has no
/// `[compare]` section, plus the usual output-directory and rendering
/// failures. Missing files and empty sample sets are skipped per unit.
pub fn render_comparison(config: &AnalysisConfig) -> Result<(), AnalysisError> {
    let compare = config.compare.as_ref().ok_or_else(|| {
        AnalysisError::InvalidConfig("comparison requires a [compare] section".to_string())
    })?;
    if compare.solutions.is_empty() {
        return Err(AnalysisError::InvalidConfig(
            "comparison requires at least one solution".to_string(),
        ));
    }

    for style in PlotStyle::ALL {
        let dir = compare.output_dir.join(style.dir_name());
        fs::create_dir_all(&dir).map_err(|source| AnalysisError::OutputDir { path: dir, source })?;
    }

    let mut entries = Vec::new();
    for solution in &compare.solutions {
        for configuration in &config.configurations {
            let files = benchmark_files(&solution.root.join(configuration));
            for (benchmark, path) in files {
                match load_samples(&path) {
                    Ok(samples) => entries.push((
                        SampleKey {
                            solution: solution.label.clone(),
                            configuration: configuration.clone(),
                            benchmark,
                        },
                        samples,
                    )),
                    Err(err) => warn!("skipping {}: {err}", path.display()),
                }
            }
        }
    }
    let grouped = group_by_benchmark(entries);

    let solutions: Vec<String> = compare.solutions.iter().map(|s| s.label.clone()).collect();
    for (benchmark, by_configuration) in &grouped {
        for style in PlotStyle::ALL {
            let path = compare
                .output_dir
                .join(style.dir_name())
                .join(format!("{benchmark}_{}.png", style.file_suffix()));
            render_panels(
                style,
                &path,
                benchmark,
                by_configuration,
                &config.configurations,
                &solutions,
                (config.plot.width, config.plot.panel_height),
            )?;
            info!(path = %path.display(), "wrote comparison plot");
        }
    }
    Ok(())
}

fn render_panels(
    style: PlotStyle,
    path: &Path,
    benchmark: &str,
    by_configuration: &BTreeMap<String, BTreeMap<String, Vec<f64>>>,
    configurations: &[String],
    solutions: &[String],
    (width, panel_height): (u32, u32),
) -> Result<(), AnalysisError> {
    let height = panel_height * configurations.len() as u32 + 40;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let suptitle = format!("{} Plot for Benchmark: {benchmark}", style.title_word());
    let titled = root.titled(&suptitle, ("sans-serif", 22)).map_err(plot_err)?;
    let panels = titled.split_evenly((configurations.len(), 1));

    for (panel, configuration) in panels.iter().zip(configurations) {
        let series: Vec<(String, Vec<f64>)> = solutions
            .iter()
            .filter_map(|solution| {
                by_configuration
                    .get(configuration)
                    .and_then(|m| m.get(solution))
                    .map(|samples| (solution.clone(), samples.clone()))
            })
            .collect();

        if series.is_empty() {
            draw_no_data(panel, configuration)?;
            continue;
        }
        draw(style, panel, &format!("Configuration: {configuration}"), &series)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_no_data(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    configuration: &str,
) -> Result<(), AnalysisError> {
    let (width, height) = area.dim_in_pixel();
    area.draw(&Text::new(
        format!("No data for {configuration}"),
        (width as i32 / 2 - 60, height as i32 / 2),
        ("sans-serif", 16).into_font(),
    ))
    .map_err(plot_err)
}
