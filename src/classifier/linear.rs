//! Multinomial linear classifier loaded from JSON weights.
//!
//! File format:
//!
//! ```json
//! {
//!   "name": "price-lr-v3",
//!   "intercepts": [0.1, -0.2, 0.05, 0.0],
//!   "coefficients": [[...25 weights...], [...], [...], [...]]
//! }
//! ```
//!
//! One intercept and one row of 25 coefficients per class, in class-index
//! order. This is the layout scikit-learn's `LogisticRegression` exposes as
//! `intercept_` / `coef_`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Classifier;
use crate::error::{BevpriceError, Result};
use crate::schema::FEATURE_LEN;
use crate::types::FeatureVector;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearModelFile {
    #[serde(default)]
    name: Option<String>,
    intercepts: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
}

/// Argmax over per-class linear scores. Ties go to the lowest index.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    name: String,
    intercepts: Vec<f64>,
    coefficients: Vec<[f64; FEATURE_LEN]>,
}

impl LinearClassifier {
    /// Build a classifier from per-class intercepts and coefficient rows.
    pub fn new(
        name: impl Into<String>,
        intercepts: Vec<f64>,
        coefficients: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if intercepts.is_empty() {
            return Err(BevpriceError::Configuration(
                "linear model has no classes".to_string(),
            ));
        }
        if intercepts.len() != coefficients.len() {
            return Err(BevpriceError::Configuration(format!(
                "linear model has {} intercepts but {} coefficient rows",
                intercepts.len(),
                coefficients.len()
            )));
        }

        let coefficients = coefficients
            .into_iter()
            .enumerate()
            .map(|(class, row)| {
                let width = row.len();
                <[f64; FEATURE_LEN]>::try_from(row).map_err(|_| {
                    BevpriceError::Configuration(format!(
                        "class {class} has {width} coefficients, expected {FEATURE_LEN}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            intercepts,
            coefficients,
        })
    }

    /// Parse a model from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LinearModelFile = serde_json::from_str(json)?;
        let name = file.name.unwrap_or_else(|| "linear".to_string());
        Self::new(name, file.intercepts, file.coefficients)
    }

    /// Load a model from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BevpriceError::Configuration(format!("Failed to read model file {path:?}: {e}"))
        })?;
        let file: LinearModelFile = serde_json::from_str(&content)?;
        let name = file
            .name
            .or_else(|| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .unwrap_or_else(|| "linear".to_string());
        Self::new(name, file.intercepts, file.coefficients)
    }

    /// Number of classes the model scores.
    pub fn num_classes(&self) -> usize {
        self.intercepts.len()
    }

    /// Raw per-class scores (intercept + dot product).
    pub fn scores(&self, features: &FeatureVector) -> Vec<f64> {
        self.intercepts
            .iter()
            .zip(&self.coefficients)
            .map(|(bias, row)| {
                bias + row
                    .iter()
                    .zip(features.as_slice())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
            })
            .collect()
    }
}

impl Classifier for LinearClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        let scores = self.scores(features);
        if scores.iter().any(|s| s.is_nan()) {
            return Err(BevpriceError::Classifier(format!(
                "{} produced a NaN score",
                self.name
            )));
        }

        let mut best = 0;
        for (class, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = class;
            }
        }
        Ok(best as i64)
    }
}
