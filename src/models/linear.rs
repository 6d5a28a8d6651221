use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::{FeatureMatrix, ModelError, Predictor};

/// Linear regression model (coefficients + intercept) stored as JSON.
///
/// ```json
/// {
///   "name": "model_a",
///   "feature_names": ["Attendance", "Math", "Science"],
///   "coefficients": [0.01, 0.012, 0.009],
///   "intercept": 0.4
/// }
/// ```
///
/// `feature_names` is informational; matching is by column count, the way a
/// model trained on a plain numeric matrix behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub name: String,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearRegressor {
    pub fn new(name: impl Into<String>, coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            name: name.into(),
            feature_names: Vec::new(),
            coefficients,
            intercept,
        }
    }

    /// Read and validate a model file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading model file {}", path.display()))?;
        let model: LinearRegressor = serde_json::from_str(&text).context("parsing model JSON")?;
        if !model.feature_names.is_empty() && model.feature_names.len() != model.coefficients.len()
        {
            bail!(
                "model lists {} feature names but {} coefficients",
                model.feature_names.len(),
                model.coefficients.len()
            );
        }
        Ok(model)
    }

    #[inline]
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }
}

impl Predictor for LinearRegressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        if features.n_cols() != self.num_features() {
            return Err(ModelError::FeatureCount {
                expected: self.num_features(),
                found: features.n_cols(),
            });
        }
        Ok(features
            .rows()
            .map(|row| {
                row.iter()
                    .zip(&self.coefficients)
                    .map(|(x, w)| x * w)
                    .sum::<f64>()
                    + self.intercept
            })
            .collect())
    }
}
