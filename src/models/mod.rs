//! Pre-trained regressors consumed by the prediction step.
//!
//! Models are opaque: the pipeline only needs `predict(matrix) -> vector`.
//! They are loaded once at startup; a model that fails to load is simply
//! absent and prediction reports it as unavailable.

mod linear;

use std::path::Path;
use std::sync::Arc;

pub use linear::LinearRegressor;

/// Errors raised by a predictor for a given input.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("expected {expected} features, got {found}")]
    FeatureCount { expected: usize, found: usize },

    #[error("{0}")]
    Fault(String),
}

/// A pre-trained regression model.
pub trait Predictor: Send + Sync {
    /// Short name used in logs and failure messages.
    fn name(&self) -> &str;

    /// Predict one value per matrix row.
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, ModelError>;
}

// ---------------------------------------------------------------------------
// FeatureMatrix
// ---------------------------------------------------------------------------

/// Dense row-major `f64` matrix with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    column_names: Vec<String>,
    n_rows: usize,
    values: Vec<f64>,
}

impl FeatureMatrix {
    /// # Panics
    ///
    /// Panics if `values.len() != n_rows * column_names.len()`.
    pub fn new(column_names: Vec<String>, n_rows: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            n_rows * column_names.len(),
            "values length doesn't match rows × columns"
        );
        Self {
            column_names,
            n_rows,
            values,
        }
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.column_names.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Feature values of one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let n = self.n_cols();
        &self.values[row * n..(row + 1) * n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.n_rows).map(move |r| self.row(r))
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a model file, or `None` if it is missing or unreadable.
pub fn load_predictor(path: &Path) -> Option<Arc<dyn Predictor>> {
    match LinearRegressor::from_path(path) {
        Ok(model) => {
            log::info!(
                "{} loaded successfully ({} features)",
                path.display(),
                model.num_features()
            );
            Some(Arc::new(model))
        }
        Err(e) => {
            log::warn!("Failed to load {}: {e:#}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_contiguous_slices() {
        let m = FeatureMatrix::new(
            vec!["a".into(), "b".into()],
            3,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let rows: Vec<&[f64]> = m.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);
    }

    #[test]
    fn zero_column_matrix_has_empty_rows() {
        let m = FeatureMatrix::new(Vec::new(), 2, Vec::new());
        assert_eq!(m.row(1), &[] as &[f64]);
    }

    #[test]
    fn missing_model_file_loads_as_none() {
        assert!(load_predictor(Path::new("definitely/not/here.json")).is_none());
    }
}
