use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};

use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the series plot in the central panel.
///
/// egui_plot has no logarithmic axes, so a log axis plots `log10` of the
/// values and labels its grid marks with the original magnitudes.
pub fn series_plot(ui: &mut Ui, state: &PlotState) {
    let options = &state.options;

    if !options.title.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(&options.title);
        });
    }

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No samples to show.");
        });
        return;
    }

    let mut plot = Plot::new("series_plot")
        .legend(Legend::default().position(options.legend_loc.corner()))
        .x_axis_label(options.x_label.as_str())
        .y_axis_label(options.y_label.as_str())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if options.log_x {
        plot = plot.x_axis_formatter(log_axis_formatter);
    }
    if options.log_y {
        plot = plot.y_axis_formatter(log_axis_formatter);
    }

    let (log_x, log_y) = (options.log_x, options.log_y);
    plot.show(ui, |plot_ui| {
        for line in state.chart_lines() {
            let points: PlotPoints = line
                .series
                .points()
                .filter_map(|(x, y)| Some([to_axis(x, log_x)?, to_axis(y, log_y)?]))
                .collect();

            plot_ui.line(
                Line::new(points)
                    .name(&line.series.name)
                    .color(line.color.to_egui())
                    .width(2.0),
            );
        }
    });
}

/// Map a value onto a (possibly log) axis; non-positive values have no
/// place on a log axis.
fn to_axis(v: f64, log: bool) -> Option<f64> {
    match log {
        false => Some(v),
        true if v > 0.0 => Some(v.log10()),
        true => None,
    }
}

fn log_axis_formatter(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    log_tick_label(mark.value)
}

/// Label for a grid mark at `exponent` on a log10 axis.
fn log_tick_label(exponent: f64) -> String {
    if (exponent - exponent.round()).abs() < 1e-9 {
        format!("1e{}", exponent.round() as i64)
    } else {
        format!("{:.2e}", 10f64.powf(exponent))
    }
}
