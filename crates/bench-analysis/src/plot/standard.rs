//! Line plot of execution time against sample index.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{plot_err, series_color, value_range};
use crate::error::AnalysisError;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    series: &[(String, Vec<f64>)],
) -> Result<(), AnalysisError> {
    let max_len = series.iter().map(|(_, s)| s.len()).max().unwrap_or(0);
    let x_max = max_len.saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = value_range(series);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Sample Index")
        .y_desc("Execution Time (ms)")
        .draw()
        .map_err(plot_err)?;

    for (idx, (label, samples)) in series.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(LineSeries::new(
                samples.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                color.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                samples
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Circle::new((i as f64, v), 3, color.filled())),
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
