//! Where a classifier comes from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::classifier::{Classifier, LinearClassifier};
use crate::error::{BevpriceError, Result};

/// Source for a trained classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// JSON weights for a [`LinearClassifier`].
    Linear {
        /// Path to the weights file.
        path: PathBuf,
    },

    /// Exported ONNX model.
    #[cfg(feature = "onnx")]
    Onnx {
        /// Path to the `.onnx` file.
        path: PathBuf,
        /// Input tensor name.
        input_name: String,
        /// Label output tensor name.
        output_name: String,
    },
}

impl ModelSource {
    /// Create a linear-weights source.
    pub fn linear(path: impl Into<PathBuf>) -> Self {
        Self::Linear { path: path.into() }
    }

    /// Create an ONNX source with the default `skl2onnx` tensor names.
    #[cfg(feature = "onnx")]
    pub fn onnx(path: impl Into<PathBuf>) -> Self {
        use crate::classifier::onnx::{DEFAULT_INPUT_NAME, DEFAULT_OUTPUT_NAME};

        Self::Onnx {
            path: path.into(),
            input_name: DEFAULT_INPUT_NAME.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }

    /// Path of the model artifact.
    pub fn path(&self) -> &Path {
        match self {
            Self::Linear { path } => path,
            #[cfg(feature = "onnx")]
            Self::Onnx { path, .. } => path,
        }
    }

    /// Load the classifier.
    pub fn load(&self) -> Result<Arc<dyn Classifier>> {
        let path = self.path();
        if !path.exists() {
            return Err(BevpriceError::Configuration(format!(
                "Model path does not exist: {}",
                path.display()
            )));
        }

        match self {
            Self::Linear { path } => Ok(Arc::new(LinearClassifier::from_file(path)?)),
            #[cfg(feature = "onnx")]
            Self::Onnx {
                path,
                input_name,
                output_name,
            } => Ok(Arc::new(crate::classifier::OnnxClassifier::with_names(
                path,
                input_name.as_str(),
                output_name.as_str(),
            )?)),
        }
    }
}
