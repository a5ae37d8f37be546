//! Load-once classifier slot.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use super::ModelSource;
use crate::classifier::Classifier;
use crate::error::{BevpriceError, Result};
use crate::telemetry;

/// Outcome of the startup classifier load, cached for the process lifetime.
///
/// A slot never reloads. An unavailable slot answers every request with
/// [`BevpriceError::ClassifierUnavailable`] without touching the model
/// source again.
#[derive(Clone)]
pub enum ClassifierSlot {
    /// Loaded and shared across requests.
    Ready(Arc<dyn Classifier>),
    /// Load failed (or no model configured); holds the reason.
    Unavailable(String),
}

impl ClassifierSlot {
    /// Load the classifier from `source`, capturing failure instead of
    /// propagating it.
    pub fn load(source: &ModelSource) -> Self {
        match source.load() {
            Ok(classifier) => {
                metrics::counter!(telemetry::CLASSIFIER_LOADS_TOTAL, "status" => "ok")
                    .increment(1);
                info!(
                    classifier = classifier.name(),
                    path = %source.path().display(),
                    "classifier loaded"
                );
                Self::Ready(classifier)
            }
            Err(e) => {
                metrics::counter!(telemetry::CLASSIFIER_LOADS_TOTAL, "status" => "error")
                    .increment(1);
                warn!(
                    path = %source.path().display(),
                    error = %e,
                    "classifier failed to load; predictions disabled"
                );
                Self::Unavailable(e.to_string())
            }
        }
    }

    /// Wrap an already-constructed classifier.
    pub fn ready(classifier: Arc<dyn Classifier>) -> Self {
        Self::Ready(classifier)
    }

    /// A slot with no classifier.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The loaded classifier, or the cached load failure.
    pub fn classifier(&self) -> Result<&Arc<dyn Classifier>> {
        match self {
            Self::Ready(classifier) => Ok(classifier),
            Self::Unavailable(reason) => Err(BevpriceError::ClassifierUnavailable(reason.clone())),
        }
    }
}

impl fmt::Debug for ClassifierSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(classifier) => f.debug_tuple("Ready").field(&classifier.name()).finish(),
            Self::Unavailable(reason) => f.debug_tuple("Unavailable").field(reason).finish(),
        }
    }
}
