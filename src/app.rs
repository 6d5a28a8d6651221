use eframe::egui;

use edutrack::Pipeline;

use crate::state::{AppState, Tab};
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EduTrackApp {
    pub state: AppState,
}

impl EduTrackApp {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            state: AppState::new(pipeline),
        }
    }
}

impl eframe::App for EduTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.tab {
                    Tab::Dashboard => dashboard::overview(ui, &self.state),
                    Tab::Academics => dashboard::academics(ui, &mut self.state),
                    Tab::Calendar => dashboard::calendar(ui, &self.state),
                    Tab::Messages => dashboard::messages(ui, &self.state),
                });
        });
    }
}
