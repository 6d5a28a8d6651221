use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::models::{self, FeatureMatrix, ModelError, Predictor};

// ---------------------------------------------------------------------------
// Predictor pair
// ---------------------------------------------------------------------------

/// The two pre-trained regressors, each optional.
///
/// Built once at startup and shared read-only afterwards; cloning only bumps
/// reference counts.
#[derive(Clone, Default)]
pub struct PredictorPair {
    first: Option<Arc<dyn Predictor>>,
    second: Option<Arc<dyn Predictor>>,
}

impl PredictorPair {
    pub fn new(first: Option<Arc<dyn Predictor>>, second: Option<Arc<dyn Predictor>>) -> Self {
        Self { first, second }
    }

    /// No models at all; every prediction reports `ModelUnavailable`.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Load both model files, keeping whichever succeed.
    pub fn load(first: &Path, second: &Path) -> Self {
        Self::new(models::load_predictor(first), models::load_predictor(second))
    }

    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// Run both models on the same matrix and average their outputs.
    ///
    /// Never panics: unavailable models, empty inputs, errors and panics
    /// inside a model all come back as a [`PredictionFailure`].
    pub fn predict_average(&self, features: &FeatureMatrix) -> Result<Vec<f64>, PredictionFailure> {
        if features.n_rows() == 0 || features.n_cols() == 0 {
            return Err(PredictionFailure::EmptyFeatures {
                rows: features.n_rows(),
                cols: features.n_cols(),
            });
        }
        let first = self.first.as_deref().ok_or_else(|| PredictionFailure::ModelUnavailable {
            model: "first".to_string(),
        })?;
        let second = self.second.as_deref().ok_or_else(|| PredictionFailure::ModelUnavailable {
            model: "second".to_string(),
        })?;

        let a = run_model(first, features)?;
        let b = run_model(second, features)?;

        Ok(a.iter().zip(&b).map(|(x, y)| (x + y) / 2.0).collect())
    }
}

impl std::fmt::Debug for PredictorPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictorPair")
            .field("first", &self.first.as_ref().map(|p| p.name().to_string()))
            .field("second", &self.second.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

fn run_model(
    model: &dyn Predictor,
    features: &FeatureMatrix,
) -> Result<Vec<f64>, PredictionFailure> {
    let name = model.name().to_string();
    let output = panic::catch_unwind(AssertUnwindSafe(|| model.predict(features)))
        .map_err(|payload| PredictionFailure::PredictorFault {
            model: name.clone(),
            message: panic_message(payload.as_ref()),
        })?;

    let values = output.map_err(|e| match e {
        ModelError::FeatureCount { expected, found } => PredictionFailure::ShapeMismatch {
            model: name.clone(),
            expected,
            found,
        },
        ModelError::Fault(message) => PredictionFailure::PredictorFault {
            model: name.clone(),
            message,
        },
    })?;

    if values.len() != features.n_rows() {
        return Err(PredictionFailure::ShapeMismatch {
            model: name,
            expected: features.n_rows(),
            found: values.len(),
        });
    }
    Ok(values)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "predictor panicked".to_string()
    }
}

// ---------------------------------------------------------------------------
// Failure reasons
// ---------------------------------------------------------------------------

/// Why no averaged prediction is available. Recoverable: the rest of the
/// report is computed regardless.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionFailure {
    #[error("{model} model is not loaded")]
    ModelUnavailable { model: String },

    #[error("nothing to predict on ({rows} rows x {cols} numeric columns)")]
    EmptyFeatures { rows: usize, cols: usize },

    #[error("{model} model: shape mismatch, expected {expected}, got {found}")]
    ShapeMismatch {
        model: String,
        expected: usize,
        found: usize,
    },

    #[error("{model} model failed: {message}")]
    PredictorFault { model: String, message: String },
}

// ---------------------------------------------------------------------------
// GPA chart series
// ---------------------------------------------------------------------------

/// Which values the caller wants for the GPA chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GpaSeriesPreference {
    /// Recorded `GPA` column when present, otherwise the prediction.
    #[default]
    RecordedFirst,
    Recorded,
    Predicted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaSeriesSource {
    Recorded,
    Predicted,
}

/// Values to plot, one per row, plus where they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaSeries {
    pub source: GpaSeriesSource,
    pub values: Vec<f64>,
}

/// Choose a GPA series according to `preference`.
pub fn select_gpa_series(
    recorded: Option<&[f64]>,
    predicted: Option<&[f64]>,
    preference: GpaSeriesPreference,
) -> Option<GpaSeries> {
    let recorded = recorded.map(|v| GpaSeries {
        source: GpaSeriesSource::Recorded,
        values: v.to_vec(),
    });
    let predicted = predicted.map(|v| GpaSeries {
        source: GpaSeriesSource::Predicted,
        values: v.to_vec(),
    });
    match preference {
        GpaSeriesPreference::RecordedFirst => recorded.or(predicted),
        GpaSeriesPreference::Recorded => recorded,
        GpaSeriesPreference::Predicted => predicted,
    }
}
