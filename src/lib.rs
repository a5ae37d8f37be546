//! Bevprice - price-category prediction from beverage survey answers
//!
//! Turns sixteen categorical and ordinal survey answers into the 25-wide
//! feature vector a trained classifier expects, runs the classifier, and maps
//! its class index back to a price category and range.
//!
//! The vector layout must match the training-time schema exactly; a shifted
//! column still produces a valid-looking but wrong prediction. The layout is
//! declared once in [`schema`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use bevprice::{LinearClassifier, PredictionPipeline, RawAnswers};
//!
//! fn main() -> bevprice::Result<()> {
//!     let classifier = LinearClassifier::from_file(Path::new("models/price.json"))?;
//!     let pipeline = PredictionPipeline::with_classifier(Arc::new(classifier));
//!
//!     let answers: RawAnswers = serde_json::from_str(
//!         &std::fs::read_to_string("answers.json").unwrap_or_default(),
//!     )?;
//!     let result = pipeline.compute_price_category(&answers)?;
//!
//!     println!("{} ({})", result.label, result.price_range);
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod telemetry;
pub mod types;
pub mod validate;
pub mod version;

// Re-export main types at crate root
pub use classifier::{Classifier, LinearClassifier};
#[cfg(feature = "onnx")]
pub use classifier::OnnxClassifier;
pub use config::Config;
pub use decoder::decode;
pub use encoder::{encode, encode_answers};
pub use error::{BevpriceError, Result};
pub use model::{ClassifierSlot, ModelSource};
pub use pipeline::PredictionPipeline;
pub use schema::{FEATURE_LEN, FEATURE_SCHEMA, FieldKind, FieldSpec};
pub use types::{
    Answer, AnswerSource, FeatureVector, Field, InputRecord, PipelineStage, PredictionResult,
    PriceCategory, RawAnswers,
};
pub use validate::{ValidationPolicy, validate, validate_with};
pub use version::{PKG_VERSION, short_sha, version_string};
