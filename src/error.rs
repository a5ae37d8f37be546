//! Bevprice error types

use crate::types::{Field, PipelineStage};

/// Bevprice error types
#[derive(Debug, thiserror::Error)]
pub enum BevpriceError {
    // Validation errors (recoverable: the caller may re-prompt)
    #[error("missing required field '{field}'")]
    MissingField { field: Field },

    #[error("unknown category '{value}' for field '{field}'")]
    UnknownCategory { field: Field, value: String },

    #[error("field '{field}' must be an integer, got '{value}'")]
    InvalidNumeric { field: Field, value: String },

    /// Every violation found when validating with
    /// [`ValidationPolicy::CollectAll`](crate::validate::ValidationPolicy).
    #[error("{} invalid answers: {}", .0.len(), join_errors(.0))]
    Validation(Vec<BevpriceError>),

    // Classifier errors
    /// The classifier failed to load at startup. Cached; never retried.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("classifier error: {0}")]
    Classifier(String),

    /// The classifier emitted an index outside the known price categories.
    #[error("class index {0} is out of range (expected 0..=3)")]
    ClassIndexOutOfRange(i64),

    // Configuration errors
    #[error("unknown field name '{0}'")]
    UnknownField(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BevpriceError {
    /// Whether this error came from input validation.
    ///
    /// Validation errors are locally recoverable: the input layer can ask
    /// for corrected answers and call the pipeline again.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::UnknownCategory { .. }
                | Self::InvalidNumeric { .. }
                | Self::Validation(_)
        )
    }

    /// The pipeline stage that produces this kind of error.
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::MissingField { .. }
            | Self::UnknownCategory { .. }
            | Self::InvalidNumeric { .. }
            | Self::Validation(_) => PipelineStage::Validating,
            Self::ClassifierUnavailable(_) | Self::Classifier(_) => PipelineStage::Predicting,
            Self::ClassIndexOutOfRange(_) => PipelineStage::Decoding,
            Self::UnknownField(_) | Self::Configuration(_) | Self::Json(_) => {
                PipelineStage::Idle
            }
        }
    }
}

fn join_errors(errors: &[BevpriceError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for Bevprice operations
pub type Result<T> = std::result::Result<T, BevpriceError>;
