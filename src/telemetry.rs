//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `bevprice_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).

/// Total pipeline invocations.
///
/// Labels: `status` ("ok" | "error"), `category` (price label, or "none" on error).
pub const PREDICTIONS_TOTAL: &str = "bevprice_predictions_total";

/// End-to-end pipeline duration in seconds.
///
/// Labels: `status`.
pub const PREDICTION_DURATION_SECONDS: &str = "bevprice_prediction_duration_seconds";

/// Pipeline failures by the stage that failed.
///
/// Labels: `stage` ("validating" | "predicting" | "decoding").
pub const STAGE_FAILURES_TOTAL: &str = "bevprice_stage_failures_total";

/// Classifier load attempts at startup.
///
/// Labels: `status` ("ok" | "error").
pub const CLASSIFIER_LOADS_TOTAL: &str = "bevprice_classifier_loads_total";
