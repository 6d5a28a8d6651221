//! Dataset → dashboard report.
//!
//! ```text
//!                 Dataset
//!                    │
//!                    ▼
//!               ┌────────┐
//!               │ schema │  column kinds + numeric subset
//!               └────────┘
//!        ┌──────────┬──┴──────────┬─────────────┐
//!        ▼          ▼             ▼             ▼
//!    metrics    subjects       predict     projection
//!        └──────────┴──────┬──────┴─────────────┘
//!                          ▼
//!                   DashboardReport
//! ```
//!
//! Each stage only reads the dataset, so a failure in one (typically
//! prediction) never hides the others.

pub mod metrics;
pub mod predict;
pub mod projection;
pub mod schema;
pub mod subjects;

use serde::Serialize;

use crate::data::model::Dataset;

use self::metrics::MetricSnapshot;
use self::predict::{GpaSeries, GpaSeriesPreference, PredictionFailure, PredictorPair};
use self::projection::{Projection, ProjectionGroup};
use self::schema::{ReservedColumn, SchemaReport};
use self::subjects::SubjectScore;

/// Everything the presentation layer needs for one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub row_count: usize,
    pub schema: SchemaReport,
    pub metrics: MetricSnapshot,
    pub subjects: Vec<SubjectScore>,
    /// Raw `GPA` column values when the upload has a numeric GPA column.
    pub recorded_gpa: Option<Vec<f64>>,
    /// Averaged output of both models, one value per row.
    pub prediction: Option<Vec<f64>>,
    pub prediction_failure: Option<PredictionFailure>,
    pub assignments: Option<Projection>,
    pub calendar: Option<Projection>,
    pub messages: Option<Projection>,
}

impl DashboardReport {
    /// GPA chart values, chosen by the caller's preference.
    pub fn gpa_series(&self, preference: GpaSeriesPreference) -> Option<GpaSeries> {
        predict::select_gpa_series(
            self.recorded_gpa.as_deref(),
            self.prediction.as_deref(),
            preference,
        )
    }

    pub fn projection(&self, group: ProjectionGroup) -> Option<&Projection> {
        match group {
            ProjectionGroup::Assignments => self.assignments.as_ref(),
            ProjectionGroup::Calendar => self.calendar.as_ref(),
            ProjectionGroup::Messages => self.messages.as_ref(),
        }
    }
}

/// The metrics and feature-extraction pipeline, with its models injected.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    models: PredictorPair,
}

impl Pipeline {
    pub fn new(models: PredictorPair) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &PredictorPair {
        &self.models
    }

    /// Run every stage over one dataset.
    pub fn run(&self, dataset: &Dataset) -> DashboardReport {
        let probe = schema::probe(dataset);
        let numeric = &probe.numeric;

        let metrics = MetricSnapshot::from_numeric(numeric);
        let subjects = subjects::subject_scores(numeric);
        let recorded_gpa = numeric.reserved(ReservedColumn::Gpa).map(<[f64]>::to_vec);

        let outcome = self.models.predict_average(&numeric.to_matrix());
        let (prediction, prediction_failure) = match outcome {
            Ok(values) => {
                log::info!("predicted GPA for {} rows", values.len());
                (Some(values), None)
            }
            Err(failure) => {
                log::warn!("Model prediction failed: {failure}");
                (None, Some(failure))
            }
        };

        DashboardReport {
            row_count: dataset.len(),
            schema: probe.schema,
            metrics,
            subjects,
            recorded_gpa,
            prediction,
            prediction_failure,
            assignments: projection::project(dataset, ProjectionGroup::Assignments),
            calendar: projection::project(dataset, ProjectionGroup::Calendar),
            messages: projection::project(dataset, ProjectionGroup::Messages),
        }
    }
}
