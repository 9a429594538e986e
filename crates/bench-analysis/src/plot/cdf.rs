//! Empirical cumulative distribution plot.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{plot_err, series_color, value_range};
use crate::error::AnalysisError;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    series: &[(String, Vec<f64>)],
) -> Result<(), AnalysisError> {
    let (x_min, x_max) = value_range(series);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..1.05f64)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Execution Time (ms)")
        .y_desc("Cumulative Probability")
        .draw()
        .map_err(plot_err)?;

    for (idx, (label, samples)) in series.iter().enumerate() {
        let color = series_color(idx);
        let mut sorted = samples.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = sorted.len() as f64;

        let points: Vec<(f64, f64)> = sorted
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, (i + 1) as f64 / n))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(plot_err)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
            )
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()
        .map_err(plot_err)?;
    Ok(())
}
