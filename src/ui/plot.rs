use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use edutrack::pipeline::predict::GpaSeriesSource;

use crate::state::AppState;

const LINE_COLOR: Color32 = Color32::from_rgb(0x4A, 0x90, 0xE2);

// ---------------------------------------------------------------------------
// GPA chart
// ---------------------------------------------------------------------------

/// Render the GPA line chart: recorded values, or predicted ones as fallback.
pub fn gpa_plot(ui: &mut Ui, state: &AppState) {
    let Some(series) = state
        .report
        .as_ref()
        .and_then(|r| r.gpa_series(state.gpa_preference))
    else {
        ui.label("No GPA values to chart (no GPA column and no prediction).");
        return;
    };

    let name = match series.source {
        GpaSeriesSource::Recorded => "GPA",
        GpaSeriesSource::Predicted => "Predicted GPA",
    };

    let coords: Vec<[f64; 2]> = series
        .values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .map(|(i, &v)| [(i + 1) as f64, v])
        .collect();

    Plot::new("gpa_plot")
        .height(300.0)
        .legend(egui_plot::Legend::default())
        .x_axis_label("Record")
        .y_axis_label("GPA")
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(coords.clone()))
                    .name(name)
                    .color(LINE_COLOR)
                    .width(3.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(coords))
                    .name(name)
                    .color(LINE_COLOR)
                    .radius(4.0),
            );
        });
}
