//! Encoding of raw submissions into the classifier's feature space.

mod encoder;

pub use encoder::{
    encode, ValidationError, AGE_RANGE, DIASTOLIC_RANGE, HEIGHT_RANGE, SYSTOLIC_RANGE,
    WEIGHT_RANGE,
};

use serde::Serialize;

/// Number of columns the classifier was trained on.
pub const FEATURE_DIM: usize = 11;

/// Column order the classifier expects. The encoder writes exactly these
/// columns, in exactly this order.
pub const COLUMNS: [&str; FEATURE_DIM] = [
    "age",
    "gender",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
];

/// Model-ready feature row. Only [`encode`] can construct one, so a vector
/// in hand is always complete, ordered, and domain-validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: [f32; FEATURE_DIM],
}

impl FeatureVector {
    pub(crate) fn new(values: [f32; FEATURE_DIM]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}
