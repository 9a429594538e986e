//! Violin plot: a mirrored Gaussian kernel-density silhouette per series,
//! with a short median tick, one violin per configuration or solution.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{plot_err, series_color};
use crate::error::AnalysisError;
use crate::stats::{percentile, SummaryStats};

const GRID_POINTS: usize = 64;
const HALF_WIDTH: f64 = 0.4;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    series: &[(String, Vec<f64>)],
) -> Result<(), AnalysisError> {
    let silhouettes: Vec<Silhouette> = series
        .iter()
        .filter_map(|(_, samples)| Silhouette::estimate(samples))
        .collect();
    if silhouettes.len() != series.len() {
        return Err(AnalysisError::Plot(
            "violin plot requires non-empty sample sets".to_string(),
        ));
    }

    let y_min = silhouettes.iter().map(|s| s.lo).fold(f64::INFINITY, f64::min);
    let y_max = silhouettes
        .iter()
        .map(|s| s.hi)
        .fold(f64::NEG_INFINITY, f64::max);
    let n = series.len();

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.6f64..(n as f64 - 0.4), y_min..y_max)
        .map_err(plot_err)?;

    let labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
    chart
        .configure_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&|x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.3 && idx >= 0.0 && (idx as usize) < labels.len() {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .x_desc("Configuration")
        .y_desc("Execution Time (ms)")
        .draw()
        .map_err(plot_err)?;

    for (idx, ((_, samples), silhouette)) in series.iter().zip(&silhouettes).enumerate() {
        let color = series_color(idx);
        let center = idx as f64;

        let peak = silhouette
            .density
            .iter()
            .copied()
            .fold(f64::MIN_POSITIVE, f64::max);
        let mut outline = Vec::with_capacity(GRID_POINTS * 2);
        for (y, d) in silhouette.grid.iter().zip(&silhouette.density) {
            outline.push((center - HALF_WIDTH * d / peak, *y));
        }
        for (y, d) in silhouette.grid.iter().zip(&silhouette.density).rev() {
            outline.push((center + HALF_WIDTH * d / peak, *y));
        }
        chart
            .draw_series(std::iter::once(Polygon::new(
                outline,
                color.mix(0.35).filled(),
            )))
            .map_err(plot_err)?;

        if let Some(median) = percentile(samples, 50.0) {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(center - 0.15, median), (center + 0.15, median)],
                    color.stroke_width(2),
                )))
                .map_err(plot_err)?;
        }
    }
    Ok(())
}

struct Silhouette {
    grid: Vec<f64>,
    density: Vec<f64>,
    lo: f64,
    hi: f64,
}

impl Silhouette {
    /// Gaussian KDE over an evenly spaced grid spanning the samples plus
    /// three bandwidths on each side.
    fn estimate(samples: &[f64]) -> Option<Self> {
        let stats = SummaryStats::from_samples(samples)?;
        let n = samples.len() as f64;

        // Silverman rule-of-thumb bandwidth; fall back to a small fixed width when the
        // spread is degenerate (all samples equal).
        let mut bandwidth = 1.06 * stats.std_dev * n.powf(-0.2);
        if bandwidth <= 0.0 {
            bandwidth = (stats.mean.abs() * 0.01).max(0.5);
        }

        let lo = stats.min - 3.0 * bandwidth;
        let hi = stats.max + 3.0 * bandwidth;
        let step = (hi - lo) / (GRID_POINTS - 1) as f64;
        let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

        let grid: Vec<f64> = (0..GRID_POINTS).map(|i| lo + step * i as f64).collect();
        let density = grid
            .iter()
            .map(|&y| {
                norm * samples
                    .iter()
                    .map(|&x| (-0.5 * ((y - x) / bandwidth).powi(2)).exp())
                    .sum::<f64>()
            })
            .collect();

        Some(Silhouette {
            grid,
            density,
            lo,
            hi,
        })
    }
}
