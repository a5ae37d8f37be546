//! Encoded feature vector.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::Field;
use crate::schema::{FEATURE_LEN, positions};

/// The classifier's input: exactly [`FEATURE_LEN`] numeric entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_LEN]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_LEN]) -> Self {
        Self(values)
    }

    /// Always [`FEATURE_LEN`].
    pub const fn len(&self) -> usize {
        FEATURE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The entries occupied by `field`.
    pub fn block(&self, field: Field) -> &[f64] {
        &self.0[positions(field)]
    }

    /// Single-precision copy, for runtimes that take `f32` tensors.
    pub fn to_f32(&self) -> [f32; FEATURE_LEN] {
        self.0.map(|v| v as f32)
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.0.to_vec()
    }
}
