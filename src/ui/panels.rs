use eframe::egui::{self, Color32, RichText, Ui};

use edutrack::data::loader::SUPPORTED_EXTENSIONS;

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("EduTrack");
    ui.separator();

    for tab in Tab::ALL {
        ui.selectable_value(&mut state.tab, tab, tab.label());
    }

    ui.separator();

    match &state.source {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(RichText::new(name).strong());
            if let Some(report) = &state.report {
                ui.label(format!(
                    "{} rows, {} columns",
                    report.row_count,
                    report.schema.columns.len()
                ));
            }
        }
        None => {
            ui.label("No dataset loaded.");
        }
    }

    ui.separator();
    let models = if state.pipeline.models().is_complete() {
        RichText::new("Models: loaded")
    } else {
        RichText::new("Models: unavailable").color(Color32::from_rgb(200, 140, 0))
    };
    ui.label(models);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(report) = &state.report {
            ui.label(format!("{} records loaded", report.row_count));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload performance records")
        .add_filter("Supported files", SUPPORTED_EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
