use std::path::{Path, PathBuf};

use edutrack::pipeline::predict::GpaSeriesPreference;
use edutrack::{DashboardReport, Dataset, Pipeline};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Academics,
    Calendar,
    Messages,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Academics, Tab::Calendar, Tab::Messages];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Academics => "Academics",
            Tab::Calendar => "Calendar",
            Tab::Messages => "Messages",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Pipeline with the models loaded at startup.
    pub pipeline: Pipeline,

    /// Last successfully parsed upload (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Report derived from `dataset`.
    pub report: Option<DashboardReport>,

    /// File the current dataset came from.
    pub source: Option<PathBuf>,

    /// Selected sidebar tab.
    pub tab: Tab,

    /// Which values feed the GPA chart.
    pub gpa_preference: GpaSeriesPreference,

    /// Parse error shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            dataset: None,
            report: None,
            source: None,
            tab: Tab::Academics,
            gpa_preference: GpaSeriesPreference::RecordedFirst,
            status_message: None,
        }
    }

    /// Load a records file and rebuild the report. A parse failure keeps the
    /// previous report and surfaces the error.
    pub fn open_path(&mut self, path: &Path) {
        match edutrack::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.column_names()
                );
                self.source = Some(path.to_path_buf());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and run the pipeline over it.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.report = Some(self.pipeline.run(&dataset));
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Prediction warning for the current report, if any.
    pub fn prediction_warning(&self) -> Option<String> {
        let failure = self.report.as_ref()?.prediction_failure.as_ref()?;
        Some(format!(
            "Model prediction failed. Ensure CSV columns match model training features. ({failure})"
        ))
    }
}
