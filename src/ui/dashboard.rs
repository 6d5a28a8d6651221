use eframe::egui::{self, Color32, ProgressBar, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use edutrack::data::loader::SUPPORTED_FORMATS;
use edutrack::pipeline::predict::GpaSeriesPreference;
use edutrack::pipeline::projection::{Projection, ProjectionGroup};
use edutrack::{CellValue, DashboardReport};

use crate::color::generate_palette;
use crate::state::AppState;
use crate::ui::plot;

const PREVIEW_ROWS: usize = 5;
const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

pub fn overview(ui: &mut Ui, state: &AppState) {
    ui.heading("Dashboard Overview");
    ui.label("Quick summary of your academic progress.");
    ui.add_space(8.0);

    let Some(report) = &state.report else {
        empty_hint(ui);
        return;
    };
    metric_cards(ui, report);
    ui.add_space(12.0);
    subject_bars(ui, report);
}

pub fn academics(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Academic Performance");
    ui.add_space(8.0);

    let Some(report) = &state.report else {
        empty_hint(ui);
        return;
    };

    metric_cards(ui, report);
    ui.add_space(12.0);

    ui.strong("Uploaded records");
    if let Some(ds) = &state.dataset {
        let rows: Vec<&[CellValue]> = ds
            .rows()
            .iter()
            .take(PREVIEW_ROWS)
            .map(Vec::as_slice)
            .collect();
        cell_table(ui, "preview", ds.column_names(), &rows);
    }
    ui.add_space(12.0);

    ui.strong("Predicted Performance (Average GPA)");
    match (&report.prediction, state.prediction_warning()) {
        (Some(values), _) => prediction_table(ui, values),
        (None, Some(warning)) => {
            ui.label(RichText::new(warning).color(Color32::from_rgb(200, 140, 0)));
        }
        (None, None) => {}
    }
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.strong("GPA Over Time");
        ui.selectable_value(&mut state.gpa_preference, GpaSeriesPreference::RecordedFirst, "Auto");
        ui.selectable_value(&mut state.gpa_preference, GpaSeriesPreference::Recorded, "Recorded");
        ui.selectable_value(&mut state.gpa_preference, GpaSeriesPreference::Predicted, "Predicted");
    });
    plot::gpa_plot(ui, state);
    ui.add_space(12.0);

    if let Some(report) = &state.report {
        subject_bars(ui, report);
        ui.add_space(12.0);
        projection_section(ui, report, ProjectionGroup::Assignments);
    }
}

pub fn calendar(ui: &mut Ui, state: &AppState) {
    ui.heading("Academic Calendar");
    match &state.report {
        Some(report) => projection_section(ui, report, ProjectionGroup::Calendar),
        None => empty_hint(ui),
    }
}

pub fn messages(ui: &mut Ui, state: &AppState) {
    ui.heading("Messages");
    match &state.report {
        Some(report) => projection_section(ui, report, ProjectionGroup::Messages),
        None => empty_hint(ui),
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

fn empty_hint(ui: &mut Ui) {
    ui.add_space(24.0);
    ui.label(format!("Upload a {SUPPORTED_FORMATS} file for analysis  (File → Open…)"));
}

fn metric_cards(ui: &mut Ui, report: &DashboardReport) {
    let m = &report.metrics;
    let cards = [
        ("Overall GPA", m.gpa_label()),
        ("Class Rank", m.rank_label()),
        ("Attendance Rate", m.attendance_label()),
    ];
    ui.columns(cards.len(), |cols| {
        for (col, (title, value)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(title);
                    ui.label(RichText::new(value).size(28.0).strong());
                });
            });
        }
    });
}

fn subject_bars(ui: &mut Ui, report: &DashboardReport) {
    ui.strong("Performance by Subject");
    if report.subjects.is_empty() {
        ui.label("No subject columns found.");
        return;
    }
    let colors = generate_palette(report.subjects.len());
    for (subject, color) in report.subjects.iter().zip(colors) {
        ui.label(format!("{} - {}%", subject.name, subject.progress_percent()));
        ui.add(
            ProgressBar::new(subject.progress_fraction())
                .fill(color)
                .desired_height(10.0),
        );
    }
}

fn prediction_table(ui: &mut Ui, values: &[f64]) {
    ui.push_id("prediction", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(200.0)
            .column(Column::auto())
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Row");
                });
                header.col(|ui| {
                    ui.strong("Predicted GPA");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, values.len(), |mut row| {
                    let i = row.index();
                    row.col(|ui| {
                        ui.label(i.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", values[i]));
                    });
                });
            });
    });
}

fn projection_section(ui: &mut Ui, report: &DashboardReport, group: ProjectionGroup) {
    ui.strong(group.title());
    match report.projection(group) {
        Some(projection) => projection_table(ui, projection),
        None => {
            ui.label(format!(
                "Not available: upload needs the columns {}.",
                group.required_columns().join(", ")
            ));
        }
    }
}

fn projection_table(ui: &mut Ui, projection: &Projection) {
    let rows: Vec<&[CellValue]> = projection.rows.iter().map(Vec::as_slice).collect();
    let id = format!("{:?}", projection.group);
    cell_table(ui, &id, &projection.columns, &rows);
}

fn cell_table(ui: &mut Ui, id: &str, columns: &[String], rows: &[&[CellValue]]) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(240.0)
            .columns(Column::auto().at_least(60.0).resizable(true), columns.len())
            .header(ROW_HEIGHT, |mut header| {
                for name in columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let cells = rows[row.index()];
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
