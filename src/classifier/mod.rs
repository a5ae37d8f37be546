//! Classifier capability.
//!
//! The trained model is an external collaborator. The pipeline only needs
//! `predict(vector) -> class index`; how the model is stored and executed is
//! up to the implementation:
//!
//! - [`LinearClassifier`]: multinomial linear model read from JSON weights
//! - `OnnxClassifier` (feature `onnx`): exported model run with ONNX Runtime
//!
//! Implementations must be usable from many threads at once without
//! mutating shared state per request.

mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use linear::LinearClassifier;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;

use crate::Result;
use crate::types::FeatureVector;

/// A trained price-category classifier.
pub trait Classifier: Send + Sync {
    /// Classifier name for logging/debugging.
    fn name(&self) -> &str;

    /// Predict the class index for one encoded vector.
    ///
    /// The index is returned unchecked; the decoder rejects values outside
    /// the known categories.
    fn predict(&self, features: &FeatureVector) -> Result<i64>;
}
