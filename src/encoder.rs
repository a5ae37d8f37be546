//! Feature encoding.
//!
//! A single routine walks [`FEATURE_SCHEMA`](crate::schema::FEATURE_SCHEMA)
//! offsets and writes each resolved answer into the vector. Encoding a
//! validated record cannot fail.

use crate::error::Result;
use crate::schema::{FEATURE_LEN, OFFSETS};
use crate::types::{Answer, AnswerSource, FeatureVector, InputRecord};
use crate::validate::validate;

/// Encode a validated record into the classifier's input vector.
pub fn encode(record: &InputRecord) -> FeatureVector {
    let mut values = [0.0; FEATURE_LEN];

    for (&offset, answer) in OFFSETS.iter().zip(record.answers()) {
        match *answer {
            Answer::Level(index) => values[offset] = index as f64,
            Answer::Score(score) => values[offset] = score as f64,
            Answer::Choice(Some(index)) => values[offset + index] = 1.0,
            Answer::Choice(None) => {}
        }
    }

    FeatureVector::new(values)
}

/// Validate raw answers (fail-fast) and encode them.
pub fn encode_answers<S: AnswerSource + ?Sized>(raw: &S) -> Result<FeatureVector> {
    Ok(encode(&validate(raw)?))
}
