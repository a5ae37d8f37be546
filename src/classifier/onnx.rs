//! Price classifier run through ONNX Runtime.
//!
//! Expects a model exported from scikit-learn (e.g. with `skl2onnx`): one
//! float input of shape `[batch, 25]` and an int64 label output.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::TensorRef;

use super::Classifier;
use crate::error::{BevpriceError, Result};
use crate::schema::FEATURE_LEN;
use crate::types::FeatureVector;

/// Default input tensor name used by `skl2onnx`.
pub const DEFAULT_INPUT_NAME: &str = "float_input";

/// Default label output name used by `skl2onnx`.
pub const DEFAULT_OUTPUT_NAME: &str = "label";

/// ONNX-backed classifier.
///
/// `Session::run` needs `&mut`, so the session sits behind a mutex; calls
/// from concurrent requests are serialized for the duration of inference.
pub struct OnnxClassifier {
    name: String,
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    /// Load a model using the default `skl2onnx` tensor names.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::with_names(path, DEFAULT_INPUT_NAME, DEFAULT_OUTPUT_NAME)
    }

    /// Load a model with explicit input and output tensor names.
    pub fn with_names(
        path: &Path,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
    ) -> Result<Self> {
        let session = build_session(path)?;
        Ok(Self {
            name: model_name(path),
            session: Mutex::new(session),
            input_name: input_name.into(),
            output_name: output_name.into(),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        let row = features.to_f32();
        let input = TensorRef::from_array_view(([1_usize, FEATURE_LEN], &row[..])).map_err(|e| {
            BevpriceError::Classifier(format!("Failed to create input tensor: {}", e))
        })?;

        let mut session = self.session.lock().map_err(|e| {
            BevpriceError::Classifier(format!("Failed to acquire session lock: {}", e))
        })?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(|e| BevpriceError::Classifier(format!("ONNX inference failed: {}", e)))?;

        let label = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            BevpriceError::Classifier(format!("No '{}' output found", self.output_name))
        })?;

        // try_extract_tensor returns (&Shape, &[T])
        let (_, labels) = label.try_extract_tensor::<i64>().map_err(|e| {
            BevpriceError::Classifier(format!("Failed to extract labels: {}", e))
        })?;

        labels
            .first()
            .copied()
            .ok_or_else(|| BevpriceError::Classifier("Empty label output".to_string()))
    }
}

fn model_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("onnx")
        .to_string()
}

fn build_session(model_path: &Path) -> Result<Session> {
    if !model_path.exists() {
        return Err(BevpriceError::Configuration(format!(
            "ONNX model not found: {}",
            model_path.display()
        )));
    }

    Session::builder()
        .map_err(|e| {
            BevpriceError::Configuration(format!("Failed to create session builder: {}", e))
        })?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| {
            BevpriceError::Configuration(format!("Failed to set optimization level: {}", e))
        })?
        .commit_from_file(model_path)
        .map_err(|e| BevpriceError::Configuration(format!("Failed to load ONNX model: {}", e)))
}
