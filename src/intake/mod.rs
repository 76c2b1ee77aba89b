//! Raw submission intake: the typed form fields and their parsing.
//! One `RawInput` per submitted form; nothing outlives the submission.

mod form;

use crate::features::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use form::FormReader;

/// One submitted form, exactly as the user entered it. Domain validation
/// happens in the encoder; categorical fields are already typed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub cholesterol: OrdinalLevel,
    pub glucose: OrdinalLevel,
    pub smoker: bool,
    pub alcohol: bool,
    pub physically_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Ordinal lab level used for both cholesterol and glucose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinalLevel {
    Normal,
    High,
    VeryHigh,
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ValidationError::UnknownValue {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for OrdinalLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "n" => Ok(OrdinalLevel::Normal),
            "high" | "h" => Ok(OrdinalLevel::High),
            "very_high" | "very high" | "veryhigh" | "vh" => Ok(OrdinalLevel::VeryHigh),
            _ => Err(ValidationError::UnknownValue {
                field: "level",
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a yes/no answer from the form.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}
