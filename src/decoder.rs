//! Prediction decoding: class index → price category.

use crate::error::Result;
use crate::types::{PredictionResult, PriceCategory};

/// Decode a classifier output index into `(label, price_range)`.
///
/// Indices outside 0..=3 are rejected with
/// [`ClassIndexOutOfRange`](crate::BevpriceError::ClassIndexOutOfRange).
pub fn decode(class_index: i64) -> Result<(&'static str, &'static str)> {
    let category = PriceCategory::from_index(class_index)?;
    Ok((category.label(), category.price_range()))
}

/// Decode a classifier output index into a [`PredictionResult`].
pub fn decode_result(class_index: i64) -> Result<PredictionResult> {
    PriceCategory::from_index(class_index).map(PredictionResult::from)
}
