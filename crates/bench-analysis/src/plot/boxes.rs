//! Box plot, one box per series.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{plot_err, series_color, value_range};
use crate::error::AnalysisError;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    series: &[(String, Vec<f64>)],
) -> Result<(), AnalysisError> {
    let labels: Vec<&str> = series.iter().map(|(label, _)| label.as_str()).collect();
    let (y_min, y_max) = value_range(series);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), y_min as f32..y_max as f32)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Configuration")
        .y_desc("Execution Time (ms)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            series
                .iter()
                .zip(labels.iter())
                .enumerate()
                .map(|(idx, ((_, samples), label))| {
                    Boxplot::new_vertical(SegmentValue::CenterOf(label), &Quartiles::new(samples))
                        .width(24)
                        .whisker_width(0.5)
                        .style(series_color(idx).stroke_width(2))
                }),
        )
        .map_err(plot_err)?;
    Ok(())
}
