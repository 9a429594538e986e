//! Mean with ±1 population standard deviation per series.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{plot_err, series_color};
use crate::error::AnalysisError;
use crate::stats::SummaryStats;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    series: &[(String, Vec<f64>)],
) -> Result<(), AnalysisError> {
    let stats: Vec<SummaryStats> = series
        .iter()
        .filter_map(|(_, samples)| SummaryStats::from_samples(samples))
        .collect();
    if stats.len() != series.len() {
        return Err(AnalysisError::Plot(
            "error-bar plot requires non-empty sample sets".to_string(),
        ));
    }

    let y_min = stats
        .iter()
        .map(|s| s.mean - s.std_dev)
        .fold(f64::INFINITY, f64::min);
    let y_max = stats
        .iter()
        .map(|s| s.mean + s.std_dev)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (y_max - y_min).max(1.0);
    let (y_min, y_max) = (y_min - span * 0.1, y_max + span * 0.1);
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

    let color = series_color(0);
    chart
        .draw_series(stats.iter().enumerate().map(|(i, s)| {
            ErrorBar::new_vertical(
                i as f64,
                s.mean - s.std_dev,
                s.mean,
                s.mean + s.std_dev,
                color.filled(),
                8,
            )
        }))
        .map_err(plot_err)?;
    chart
        .draw_series(LineSeries::new(
            stats.iter().enumerate().map(|(i, s)| (i as f64, s.mean)),
            color.stroke_width(2),
        ))
        .map_err(plot_err)?;
    Ok(())
}
