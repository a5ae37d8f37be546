//! Prediction pipeline.
//!
//! Composes validation, encoding, classification and decoding:
//!
//! ```text
//! Idle ──► Validating ──► Encoding ──► Predicting ──► Decoding ──► Done
//!              │                           │              │
//!              └───────────────────────────┴──────────────┴──► Failed
//! ```
//!
//! Each state carries the payload the next stage needs. Encoding is total
//! over validated records and cannot fail. Nothing is retried: the caller
//! decides whether to resubmit corrected answers.
//!
//! An unavailable classifier short-circuits before validation, so no
//! encoding work is done for a request that cannot be answered.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::classifier::Classifier;
use crate::config::Config;
use crate::encoder::encode;
use crate::error::{BevpriceError, Result};
use crate::model::ClassifierSlot;
use crate::telemetry;
use crate::types::{
    AnswerSource, FeatureVector, InputRecord, PipelineStage, PredictionResult, PriceCategory,
};
use crate::validate::{ValidationPolicy, validate_with};

/// In-flight state of a single request.
enum State {
    Validating,
    Encoding(InputRecord),
    Predicting(FeatureVector),
    Decoding(i64),
    Done(PredictionResult),
    Failed {
        stage: PipelineStage,
        error: BevpriceError,
    },
}

impl State {
    fn stage(&self) -> PipelineStage {
        match self {
            Self::Validating => PipelineStage::Validating,
            Self::Encoding(_) => PipelineStage::Encoding,
            Self::Predicting(_) => PipelineStage::Predicting,
            Self::Decoding(_) => PipelineStage::Decoding,
            Self::Done(_) => PipelineStage::Done,
            Self::Failed { .. } => PipelineStage::Failed,
        }
    }
}

/// Answers → price category.
///
/// Stateless per request and safe to share across threads: the schema is
/// immutable and the classifier is only read.
#[derive(Debug, Clone)]
pub struct PredictionPipeline {
    slot: ClassifierSlot,
    policy: ValidationPolicy,
}

impl PredictionPipeline {
    /// Create a pipeline around a loaded (or failed) classifier slot.
    pub fn new(slot: ClassifierSlot) -> Self {
        Self {
            slot,
            policy: ValidationPolicy::default(),
        }
    }

    /// Create a pipeline around an already-constructed classifier.
    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self::new(ClassifierSlot::ready(classifier))
    }

    /// Build a pipeline from configuration, loading the classifier once.
    ///
    /// Never fails: a missing model section or a failed load yields a
    /// pipeline whose predictions report `ClassifierUnavailable`.
    pub fn from_config(config: &Config) -> Self {
        let slot = match config.model.as_ref().map(|m| m.source()) {
            Some(Ok(source)) => ClassifierSlot::load(&source),
            Some(Err(e)) => {
                warn!(error = %e, "invalid model configuration; predictions disabled");
                ClassifierSlot::unavailable(e.to_string())
            }
            None => {
                warn!("no model configured; predictions disabled");
                ClassifierSlot::unavailable("no model configured")
            }
        };
        Self::new(slot).validation_policy(config.validation.policy)
    }

    /// Set the validation policy.
    pub fn validation_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether predictions can be served.
    pub fn is_ready(&self) -> bool {
        self.slot.is_ready()
    }

    /// The classifier slot.
    pub fn slot(&self) -> &ClassifierSlot {
        &self.slot
    }

    /// Validate and encode without classifying.
    pub fn encode<S: AnswerSource + ?Sized>(&self, raw: &S) -> Result<FeatureVector> {
        validate_with(raw, self.policy).map(|record| encode(&record))
    }

    /// Run the full pipeline on raw answers.
    #[instrument(skip_all, fields(operation = "compute_price_category"))]
    pub fn compute_price_category<S: AnswerSource + ?Sized>(
        &self,
        raw: &S,
    ) -> Result<PredictionResult> {
        let start = Instant::now();

        let classifier = match self.slot.classifier() {
            Ok(classifier) => classifier,
            Err(error) => return Self::finish(Err((PipelineStage::Predicting, error)), start),
        };

        let mut state = State::Validating;
        loop {
            state = match state {
                State::Validating => match validate_with(raw, self.policy) {
                    Ok(record) => State::Encoding(record),
                    Err(error) => State::Failed {
                        stage: PipelineStage::Validating,
                        error,
                    },
                },
                State::Encoding(record) => State::Predicting(encode(&record)),
                State::Predicting(features) => match classifier.predict(&features) {
                    Ok(index) => State::Decoding(index),
                    Err(error) => State::Failed {
                        stage: PipelineStage::Predicting,
                        error,
                    },
                },
                State::Decoding(index) => match PriceCategory::from_index(index) {
                    Ok(category) => State::Done(category.into()),
                    Err(error) => State::Failed {
                        stage: PipelineStage::Decoding,
                        error,
                    },
                },
                State::Done(result) => return Self::finish(Ok(result), start),
                State::Failed { stage, error } => {
                    return Self::finish(Err((stage, error)), start);
                }
            };
            debug!(stage = %state.stage(), "pipeline advanced");
        }
    }

    /// Record metrics for a terminal state and hand back the result.
    fn finish(
        outcome: std::result::Result<PredictionResult, (PipelineStage, BevpriceError)>,
        start: Instant,
    ) -> Result<PredictionResult> {
        let elapsed = start.elapsed().as_secs_f64();
        match outcome {
            Ok(result) => {
                metrics::counter!(telemetry::PREDICTIONS_TOTAL,
                    "status" => "ok",
                    "category" => result.label,
                )
                .increment(1);
                metrics::histogram!(telemetry::PREDICTION_DURATION_SECONDS, "status" => "ok")
                    .record(elapsed);
                debug!(category = result.label, "prediction done");
                Ok(result)
            }
            Err((stage, error)) => {
                metrics::counter!(telemetry::PREDICTIONS_TOTAL,
                    "status" => "error",
                    "category" => "none",
                )
                .increment(1);
                metrics::histogram!(telemetry::PREDICTION_DURATION_SECONDS, "status" => "error")
                    .record(elapsed);
                metrics::counter!(telemetry::STAGE_FAILURES_TOTAL, "stage" => stage.as_str())
                    .increment(1);
                if error.is_validation() {
                    debug!(%stage, error = %error, "prediction rejected");
                } else {
                    warn!(%stage, error = %error, "prediction failed");
                }
                Err(error)
            }
        }
    }
}
