//! Classifier capability boundary. The advisor only ever sees [`Classifier`],
//! so it can be exercised against a fake without loading the real artifact.

mod onnx;

pub use onnx::OnnxClassifier;

use crate::features::FeatureVector;
use std::path::PathBuf;
use thiserror::Error;

/// Binary classifier over the 11-column cardio feature row.
///
/// The contract mirrors the trained artifact: `predict` yields a class label
/// in {0, 1}, `predict_proba` yields the probability mass per class as
/// `[p_no_risk, p_at_risk]`.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError>;
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ClassifierError>;
}

/// The classifier produced a malformed or inconsistent result. Surfaced to
/// the user as "prediction unavailable"; details go to the error log.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("classifier consumed {got} feature columns, expected {expected}")]
    WrongVectorLength { expected: usize, got: usize },

    #[error("artifact returned no {0} output")]
    MissingOutput(&'static str),

    #[error("probability output has {0} classes, expected 2")]
    BadProbabilityArity(usize),

    #[error("label {0} outside {{0, 1}}")]
    LabelOutOfRange(i64),

    #[error("probability {value} for class {class} outside [0, 1]")]
    ProbabilityOutOfRange { class: usize, value: f64 },

    #[error("probabilities [{p0}, {p1}] do not sum to 1")]
    MassMismatch { p0: f64, p1: f64 },

    #[error("label {label} contradicts probabilities [{p0}, {p1}]")]
    LabelProbabilityMismatch { label: i64, p0: f64, p1: f64 },
}

/// The artifact could not be loaded at startup. Fatal: the process must not
/// serve submissions without a classifier.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("model artifact not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load model artifact: {0}")]
    Load(#[from] ort::Error),
}
