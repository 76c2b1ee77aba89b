//! Domain validation and the encoding codes the classifier was trained on.

use super::{FeatureVector, FEATURE_DIM};
use crate::intake::{Gender, OrdinalLevel, RawInput};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 50..=250;
pub const WEIGHT_RANGE: RangeInclusive<u32> = 20..=300;
pub const SYSTOLIC_RANGE: RangeInclusive<u32> = 80..=250;
pub const DIASTOLIC_RANGE: RangeInclusive<u32> = 50..=200;

/// A submission field the user has to correct. Never fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{field}: unrecognized value {value:?}")]
    UnknownValue { field: &'static str, value: String },
}

fn checked(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<f32, ValidationError> {
    if range.contains(&value) {
        Ok(value as f32)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

// Codes fixed at training time; changing any of these desynchronizes the
// encoder from the artifact.
fn gender_code(gender: Gender) -> f32 {
    match gender {
        Gender::Male => 1.0,
        Gender::Female => 2.0,
    }
}

fn level_code(level: OrdinalLevel) -> f32 {
    match level {
        OrdinalLevel::Normal => 1.0,
        OrdinalLevel::High => 2.0,
        OrdinalLevel::VeryHigh => 3.0,
    }
}

fn flag_code(flag: bool) -> f32 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Encode one submission into the classifier's column order (see
/// [`super::COLUMNS`]). Pure and total over valid input; an out-of-domain
/// field fails the whole encoding, so no partial vector ever escapes.
pub fn encode(raw: &RawInput) -> Result<FeatureVector, ValidationError> {
    let values: [f32; FEATURE_DIM] = [
        checked("age", raw.age, &AGE_RANGE)?,
        gender_code(raw.gender),
        checked("height_cm", raw.height_cm, &HEIGHT_RANGE)?,
        checked("weight_kg", raw.weight_kg, &WEIGHT_RANGE)?,
        checked("systolic_bp", raw.systolic_bp, &SYSTOLIC_RANGE)?,
        checked("diastolic_bp", raw.diastolic_bp, &DIASTOLIC_RANGE)?,
        level_code(raw.cholesterol),
        level_code(raw.glucose),
        flag_code(raw.smoker),
        flag_code(raw.alcohol),
        flag_code(raw.physically_active),
    ];
    Ok(FeatureVector::new(values))
}
